//! Civil calendar date/time with whole-second precision.
//!
//! `CivilTime` is the timestamp every query starts from. It is assumed to be
//! already expressed in the caller's reference time; no zone or longitude
//! correction is applied here.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, calendar_from_day_number, calendar_to_jd, days_in_month, jd_to_calendar,
    julian_day_number,
};
use crate::{MAX_YEAR, MIN_YEAR};

/// Proleptic Gregorian date and wall-clock time.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    /// Build a validated timestamp inside the supported year range.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::OutOfSupportedRange { year });
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidCivilTime("month must be in 1..=12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidCivilTime("day is outside the month"));
        }
        if hour > 23 {
            return Err(TimeError::InvalidCivilTime("hour must be in 0..=23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidCivilTime("minute must be in 0..=59"));
        }
        if second > 59 {
            return Err(TimeError::InvalidCivilTime("second must be in 0..=59"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Timestamp at minute precision (`second = 0`).
    pub fn from_ymd_hm(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        Self::new(year, month, day, hour, minute, 0)
    }

    /// Convert a Julian Date back to civil time, truncating to the second.
    ///
    /// Not range-checked: computed instants may fall one year outside the
    /// range accepted by [`CivilTime::new`].
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day, seconds) = jd_to_calendar(jd);
        Self::from_day_seconds(year, month, day, seconds)
    }

    fn from_day_seconds(year: i32, month: u32, day: u32, seconds: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: seconds / 3600,
            minute: (seconds % 3600) / 60,
            second: seconds % 60,
        }
    }

    /// Seconds elapsed since local midnight.
    pub const fn seconds_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Julian Day Number of the calendar date (time of day ignored).
    pub fn day_number(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Continuous Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day, self.seconds_of_day())
    }

    /// Whole days from `self`'s date to `other`'s date.
    pub fn days_until(&self, other: &CivilTime) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Shift by a signed number of seconds, crossing day/month/year boundaries.
    pub fn offset_seconds(&self, delta: i64) -> Result<Self, TimeError> {
        let per_day = i64::from(SECONDS_PER_DAY);
        let total = self.day_number() * per_day + i64::from(self.seconds_of_day()) + delta;
        let (year, month, day) = calendar_from_day_number(total.div_euclid(per_day));
        let shifted = Self::from_day_seconds(year, month, day, total.rem_euclid(per_day) as u32);
        if !(MIN_YEAR..=MAX_YEAR).contains(&shifted.year) {
            return Err(TimeError::OutOfSupportedRange {
                year: shifted.year,
            });
        }
        Ok(shifted)
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

fn parse_field<T: FromStr>(s: &str, what: &str) -> Result<T, TimeError> {
    s.parse()
        .map_err(|_| TimeError::Parse(format!("invalid {what}: {s:?}")))
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm`, `YYYY-MM-DDThh:mm:ss`; a space
/// may replace the `T`.
impl FromStr for CivilTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let mut date_parts = date.splitn(3, '-');
        let (Some(y), Some(mo), Some(d)) = (date_parts.next(), date_parts.next(), date_parts.next())
        else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {date:?}")));
        };
        let year = parse_field(y, "year")?;
        let month = parse_field(mo, "month")?;
        let day = parse_field(d, "day")?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0),
            Some(t) => {
                let parts: Vec<&str> = t.split(':').collect();
                match parts.as_slice() {
                    [h, mi] => (parse_field(h, "hour")?, parse_field(mi, "minute")?, 0),
                    [h, mi, sec] => (
                        parse_field(h, "hour")?,
                        parse_field(mi, "minute")?,
                        parse_field(sec, "second")?,
                    ),
                    _ => return Err(TimeError::Parse(format!("expected hh:mm[:ss], got {t:?}"))),
                }
            }
        };

        Self::new(year, month, day, hour, minute, second)
    }
}

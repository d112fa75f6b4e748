//! Julian Day conversions for the proleptic Gregorian calendar.
//!
//! Day numbers are integers counted from the Julian Day epoch; Julian Dates
//! are continuous `f64` values that start at midnight of a civil day at
//! `JDN - 0.5`. No Julian/Gregorian cutover is applied.

/// Julian Date of J2000.0 (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Julian Day Number of a proleptic Gregorian date.
///
/// January and February are counted as months 13 and 14 of the previous
/// year so that the leap day falls at the end of the shifted year.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Inverse of [`julian_day_number`]: `(year, month, day)`.
pub fn calendar_from_day_number(jdn: i64) -> (i32, u32, u32) {
    let mut l = jdn + 68_569;
    let n = (4 * l).div_euclid(146_097);
    l -= (146_097 * n + 3).div_euclid(4);
    let i = (4000 * (l + 1)).div_euclid(1_461_001);
    l = l - (1461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2447);
    let day = l - (2447 * j).div_euclid(80);
    l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year as i32, month as u32, day as u32)
}

/// Julian Date for a civil date plus seconds elapsed since midnight.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, seconds_of_day: u32) -> f64 {
    julian_day_number(year, month, day) as f64 - 0.5
        + f64::from(seconds_of_day) / f64::from(SECONDS_PER_DAY)
}

/// Julian Date to `(year, month, day, seconds_of_day)`.
///
/// Seconds are truncated, never rounded up into the next day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, u32, u32) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let frac = shifted - z;
    let (year, month, day) = calendar_from_day_number(z as i64);
    let seconds = ((frac * f64::from(SECONDS_PER_DAY)).floor() as u32).min(SECONDS_PER_DAY - 1);
    (year, month, day, seconds)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

//! Civil calendar time for sexagenary calendar calculations.
//!
//! This crate provides:
//! - `CivilTime`, a validated proleptic Gregorian timestamp
//! - Julian Day Number / Julian Date conversions in both directions
//! - The supported year range shared by the whole workspace

pub mod civil_time;
pub mod error;
pub mod julian;

pub use civil_time::CivilTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_from_day_number, calendar_to_jd,
    days_in_month, is_leap_year, jd_to_calendar, jd_to_centuries, julian_day_number,
};

/// Earliest civil year accepted for input timestamps.
pub const MIN_YEAR: i32 = 1;

/// Latest civil year accepted for input timestamps.
pub const MAX_YEAR: i32 = 9999;

/// Check that a civil year lies in `MIN_YEAR..=MAX_YEAR`.
pub fn check_supported_year(year: i32) -> Result<(), TimeError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeError::OutOfSupportedRange { year })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_year_bounds() {
        assert!(check_supported_year(MIN_YEAR).is_ok());
        assert!(check_supported_year(MAX_YEAR).is_ok());
        assert_eq!(
            check_supported_year(-1),
            Err(TimeError::OutOfSupportedRange { year: -1 })
        );
    }
}

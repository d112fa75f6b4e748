//! Golden values for Julian Day conversions and civil time arithmetic.

use bazi_time::{
    CivilTime, J2000_JD, TimeError, calendar_from_day_number, calendar_to_jd, jd_to_calendar,
    julian_day_number,
};

#[test]
fn known_day_numbers() {
    // Proleptic Gregorian; 1582-10-15 is the first Gregorian day.
    assert_eq!(julian_day_number(1, 1, 1), 1_721_426);
    assert_eq!(julian_day_number(1582, 10, 15), 2_299_161);
    assert_eq!(julian_day_number(1858, 11, 17), 2_400_001);
    assert_eq!(julian_day_number(1949, 10, 1), 2_433_191);
    assert_eq!(julian_day_number(9999, 12, 31), 5_373_484);
}

#[test]
fn day_number_steps_match_civil_offsets() {
    let mut t = CivilTime::new(1999, 12, 25, 0, 0, 0).unwrap();
    for _ in 0..20 {
        let next = t.offset_seconds(86_400).unwrap();
        assert_eq!(next.day_number(), t.day_number() + 1);
        assert_eq!(
            calendar_from_day_number(next.day_number()),
            (next.year, next.month, next.day)
        );
        t = next;
    }
    assert_eq!(t.to_string(), "2000-01-14T00:00:00");
}

#[test]
fn jd_calendar_roundtrip_to_the_second() {
    let cases = [
        (1, 1, 1, 0),
        (1984, 8, 7, 29_131),
        (2000, 1, 1, 43_200),
        (2024, 2, 29, 86_399),
        (9999, 12, 31, 3_600),
    ];
    for (y, m, d, s) in cases {
        // 10 ms past the second boundary so truncation lands on `s`.
        let jd = calendar_to_jd(y, m, d, s) + 0.01 / 86_400.0;
        assert_eq!(jd_to_calendar(jd), (y, m, d, s), "{y}-{m}-{d} +{s}s");
    }
}

#[test]
fn j2000_from_civil_time() {
    let t = CivilTime::new(2000, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(t.to_jd(), J2000_JD);
}

#[test]
fn one_minute_steps_keep_order() {
    let lichun = CivilTime::new(2024, 2, 4, 8, 13, 18).unwrap();
    let before = lichun.offset_seconds(-60).unwrap();
    let after = lichun.offset_seconds(60).unwrap();
    assert_eq!(before.to_string(), "2024-02-04T08:12:18");
    assert_eq!(after.to_string(), "2024-02-04T08:14:18");
    assert!(before < lichun && lichun < after);
}

#[test]
fn range_errors_are_not_clamped() {
    let last = CivilTime::new(9999, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(
        last.offset_seconds(1),
        Err(TimeError::OutOfSupportedRange { year: 10_000 })
    );
}

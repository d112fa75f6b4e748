//! Apparent geocentric solar longitude from a low-order series.
//!
//! Mean longitude and mean anomaly are quadratic in Julian centuries since
//! J2000.0, the equation of center has three terms, and nutation in longitude
//! is reduced to its leading term in the Moon's ascending node. Accuracy is
//! roughly 0.01 deg near the present era and degrades slowly with |T|.

use bazi_base::normalize_360;
use bazi_time::jd_to_centuries;

/// Apparent ecliptic longitude of the Sun in degrees [0, 360).
pub fn apparent_solar_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = normalize_360(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let m = normalize_360(357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(l0 + center - 0.00478 * omega.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_time::J2000_JD;

    #[test]
    fn j2000_value() {
        let lon = apparent_solar_longitude_deg(J2000_JD);
        assert!((lon - 280.378_244_878_809_54).abs() < 1e-9, "got {lon}");
    }

    #[test]
    fn always_in_range() {
        let mut jd = 1_721_000.0;
        while jd < 5_375_000.0 {
            let lon = apparent_solar_longitude_deg(jd);
            assert!((0.0..360.0).contains(&lon), "jd {jd}: {lon}");
            jd += 997.3;
        }
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let a = apparent_solar_longitude_deg(J2000_JD);
        let b = apparent_solar_longitude_deg(J2000_JD + 1.0);
        let rate = b - a;
        assert!(rate > 0.95 && rate < 1.03, "rate {rate}");
    }
}

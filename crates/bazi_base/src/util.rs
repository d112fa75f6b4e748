//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle difference to (-180, 180] degrees.
///
/// Differences already inside (-360, 360) are shifted by at most one turn
/// without any other rounding.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r > 180.0 {
        r - 360.0
    } else if r <= -180.0 {
        r + 360.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn pm180_crosses_zero() {
        assert!((normalize_pm180(359.0) + 1.0).abs() < 1e-12);
        assert!((normalize_pm180(-359.0) - 1.0).abs() < 1e-12);
        assert!((normalize_pm180(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pm180_small_values_untouched() {
        assert_eq!(normalize_pm180(-0.123_456_789), -0.123_456_789);
        assert_eq!(normalize_pm180(179.999), 179.999);
    }

    #[test]
    fn pm180_half_turn_is_positive() {
        assert_eq!(normalize_pm180(180.0), 180.0);
        assert_eq!(normalize_pm180(-180.0), 180.0);
    }
}

//! Angle wrapping helpers

use std::f64::consts::PI;

/// Wrap an angle into `[0, 2π)`.
///
/// Input must be finite; callers validate poses before reaching here.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    // rem_euclid of a tiny negative value rounds up to exactly 2π
    if wrapped >= 2.0 * PI {
        0.0
    } else {
        wrapped
    }
}

/// Signed difference `a - b` wrapped into `(-π, π]`
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let d = normalize_angle(a - b);
    if d > PI {
        d - 2.0 * PI
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_range() {
        for &a in &[-100.0, -2.0 * PI, -PI, -1e-3, 0.0, 1.0, PI, 2.0 * PI, 7.5, 1e6] {
            let n = normalize_angle(a);
            assert!(n >= 0.0 && n < 2.0 * PI, "{} -> {}", a, n);
            assert!(angle_difference(n, a).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normalize_angle_values() {
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!((normalize_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert_eq!(normalize_angle(2.0 * PI), 0.0);
    }

    #[test]
    fn test_normalize_tiny_negative_folds_to_zero() {
        assert_eq!(normalize_angle(-1e-17), 0.0);
    }

    #[test]
    fn test_angle_difference() {
        assert!((angle_difference(0.1, 2.0 * PI - 0.1) - 0.2).abs() < 1e-12);
        assert!((angle_difference(-PI / 2.0, 3.0 * PI / 2.0)).abs() < 1e-12);
        assert!((angle_difference(PI, 0.0) - PI).abs() < 1e-12);
    }
}

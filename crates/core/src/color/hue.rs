//! Hue arithmetic on the unit circle
//!
//! Hues are fractions of a turn. A hue range `[min, max)` is normalized so that
//! `min` lies in `[0,1)` and `max` is the smallest equivalent hue strictly above it,
//! which lets ranges cross the red boundary (e.g. `0.8 → 1.2`).

use super::convert::wrap01;
use super::tables::HUE_SCALE;
use crate::error::ColorError;

/// Tolerance used when comparing range endpoints.
const RANGE_TOLERANCE: f64 = 0.0001;

/// Return the hue in `[0,1)`.
#[inline]
pub fn normalize_hue(hue: f64) -> f64 {
    wrap01(hue)
}

/// Normalize a hue range.
///
/// `min` is wrapped into `[0,1)` and `max` becomes the smallest equivalent hue strictly
/// greater than `min`. A range spanning a full turn stays a full turn instead of
/// collapsing to an empty one.
pub fn normalize_hue_range(min: f64, max: f64) -> (f64, f64) {
    let delta = max - min;
    let min = normalize_hue(min);
    let mut max = normalize_hue(max);
    if max <= min + RANGE_TOLERANCE {
        max += 1.0;
    }
    if (max - min).abs() < RANGE_TOLERANCE && (delta - 1.0).abs() < RANGE_TOLERANCE {
        max += 1.0;
    }
    (min, max)
}

/// Normalize a hue range and place `mid` inside `[min, max]`.
///
/// # Errors
///
/// Returns [`ColorError::MidpointOutOfRange`] if `mid` does not fall inside the
/// normalized range, which means the caller passed an inconsistent range.
pub fn normalize_hue_range_with_mid(
    min: f64,
    mid: f64,
    max: f64,
) -> Result<(f64, f64, f64), ColorError> {
    let (min, max) = normalize_hue_range(min, max);
    let mut mid = normalize_hue(mid);
    if mid < min {
        mid += 1.0;
    }
    if max < mid {
        return Err(ColorError::MidpointOutOfRange { min, mid, max });
    }
    Ok((min, mid, max))
}

/// Shortest distance between two hues around the circle, in `[0, 0.5]`.
pub fn hue_distance(hue1: f64, hue2: f64) -> f64 {
    let dh = (normalize_hue(hue1) - normalize_hue(hue2)).abs();
    if dh > 0.5 {
        1.0 - dh
    } else {
        dh
    }
}

/// True if `hue` lies in `[min, max)` on the circle.
pub fn hue_contained(min: f64, max: f64, hue: f64) -> bool {
    let (mut min, mut max) = normalize_hue_range(min, max);
    let hue = normalize_hue(hue);
    // Shift the window down rather than the hue up; adding 1.0 to the hue is not stable
    if hue < min {
        min -= 1.0;
        max -= 1.0;
    }
    min <= hue && hue < max
}

/// Remap a hue through the perceptual warp table.
///
/// Pulls hues towards the primaries and secondaries so evenly spaced inputs look more
/// evenly spaced on LEDs. Negative hues are folded by magnitude before lookup.
pub fn scale_hue(hue: f64) -> f64 {
    let hue = positive_mod(hue, 1.0);
    let index = (hue * HUE_SCALE.len() as f64) as usize % HUE_SCALE.len();
    f64::from(HUE_SCALE[index]) / 512.0
}

/// `|a| mod |b|`, in `[0, |b|)`. Returns `0` when `b` is zero.
pub fn positive_mod(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return 0.0;
    }
    let a = a.abs();
    let b = b.abs();
    a - (a / b).floor() * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_range_crossing_red() {
        let (min, max) = normalize_hue_range(0.8, 0.2);
        assert_abs_diff_eq!(min, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(max, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_range_wraps_both_ends() {
        let (min, max) = normalize_hue_range(2.25, 2.75);
        assert_abs_diff_eq!(min, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(max, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_range_keeps_full_circle() {
        let (min, max) = normalize_hue_range(0.3, 1.3);
        assert_abs_diff_eq!(min, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(max - min, 1.0, epsilon = 1e-9);

        // An empty range is also pushed out to one turn
        let (min, max) = normalize_hue_range(0.4, 0.4);
        assert_abs_diff_eq!(max - min, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_with_mid_places_midpoint() {
        let (min, mid, max) = normalize_hue_range_with_mid(0.8, 0.05, 0.2).unwrap();
        assert_abs_diff_eq!(min, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(mid, 1.05, epsilon = 1e-12);
        assert_abs_diff_eq!(max, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_with_mid_outside_range_fails() {
        let err = normalize_hue_range_with_mid(0.1, 0.5, 0.3).unwrap_err();
        assert!(matches!(err, ColorError::MidpointOutOfRange { .. }));
    }

    #[test]
    fn test_hue_distance() {
        assert_abs_diff_eq!(hue_distance(0.1, 0.9), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(hue_distance(0.1, 0.4), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(hue_distance(0.0, 0.5), 0.5, epsilon = 1e-12);
        for x in [0.0, 0.3, 0.999, 1.7, -0.2] {
            assert_eq!(hue_distance(x, x), 0.0);
        }
    }

    #[test]
    fn test_hue_contained_across_boundary() {
        assert!(hue_contained(0.8, 0.2, 0.9));
        assert!(hue_contained(0.8, 0.2, 0.1));
        assert!(hue_contained(0.8, 0.2, 0.8));
        assert!(!hue_contained(0.8, 0.2, 0.5));
        assert!(!hue_contained(0.8, 0.2, 0.2));
    }

    #[test]
    fn test_hue_contained_plain_range() {
        assert!(hue_contained(0.2, 0.6, 0.4));
        assert!(hue_contained(0.2, 0.6, 1.4));
        assert!(!hue_contained(0.2, 0.6, 0.7));
    }

    #[test]
    fn test_scale_hue_fixed_points_and_range() {
        assert_eq!(scale_hue(0.0), 0.0);
        assert_eq!(scale_hue(0.5), f64::from(HUE_SCALE[256]) / 512.0);
        assert_eq!(scale_hue(1.0), 0.0);

        let mut last = 0.0;
        for i in 0..512 {
            let scaled = scale_hue(f64::from(i) / 512.0);
            assert!((0.0..1.0).contains(&scaled));
            assert!(scaled >= last);
            last = scaled;
        }
    }

    #[test]
    fn test_scale_hue_folds_negative_by_magnitude() {
        assert_eq!(scale_hue(-0.25), scale_hue(0.25));
    }

    #[test]
    fn test_positive_mod() {
        assert_abs_diff_eq!(positive_mod(7.5, 2.0), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(positive_mod(-7.5, 2.0), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(positive_mod(7.5, -2.0), 1.5, epsilon = 1e-12);
        assert_eq!(positive_mod(3.0, 0.0), 0.0);
    }
}

//! Wheel geometry
//!
//! Segment `i` covers `[i * span, (i + 1) * span)` in the wheel's own frame.
//! The wheel is drawn rotated by the current angle while the pointer stays
//! fixed at on-screen angle 0, so the segment under the pointer is the one
//! containing wheel-frame angle `-current_angle`. The painter in
//! [`crate::surface::render`] and [`segment_index`] both depend on this
//! convention; moving the pointer means changing both.

use std::f64::consts::TAU;

/// Geometry errors
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("wheel has no segments")]
    NoSegments,
    #[error("angle is not finite: {0}")]
    NonFiniteAngle(f64),
}

/// Angular span of one segment for `n` entries
#[inline]
pub fn segment_span(n: usize) -> Result<f64, GeometryError> {
    if n == 0 {
        return Err(GeometryError::NoSegments);
    }
    Ok(TAU / n as f64)
}

/// Normalize any angle into `[0, 2π)`
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Index of the segment under the pointer when the wheel is rotated by `angle`.
///
/// Always in `[0, n)`. Periodic in `angle` with period `2π`. An angle lying
/// exactly on a boundary resolves to the segment that starts there.
pub fn segment_index(angle: f64, n: usize) -> Result<usize, GeometryError> {
    let span = segment_span(n)?;
    if !angle.is_finite() {
        return Err(GeometryError::NonFiniteAngle(angle));
    }

    let pointer = normalize_angle(TAU - normalize_angle(angle));
    let index = (pointer / span).floor() as usize;

    // Clamp against rounding at the top boundary
    Ok(index.min(n - 1))
}

/// Wheel-frame start angle of segment `index`
#[inline]
pub fn segment_start(index: usize, n: usize) -> Result<f64, GeometryError> {
    Ok(index as f64 * segment_span(n)?)
}

/// Wheel-frame mid angle of segment `index` (where its label is drawn)
#[inline]
pub fn segment_mid(index: usize, n: usize) -> Result<f64, GeometryError> {
    let span = segment_span(n)?;
    Ok(index as f64 * span + span / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_segment_span() {
        assert_eq!(segment_span(4), Ok(FRAC_PI_2));
        assert_eq!(segment_span(1), Ok(TAU));
        assert_eq!(segment_span(0), Err(GeometryError::NoSegments));
    }

    #[test]
    fn test_boundaries_for_four_segments() {
        assert_eq!(segment_index(0.0, 4), Ok(0));
        assert_eq!(segment_index(TAU, 4), Ok(0));
        assert_eq!(segment_index(PI, 4), Ok(2));
    }

    #[test]
    fn test_quarter_turns() {
        // Rotating forward by a quarter brings the last segment under the pointer
        assert_eq!(segment_index(FRAC_PI_2 - 0.1, 4), Ok(3));
        assert_eq!(segment_index(3.0 * FRAC_PI_2 - 0.1, 4), Ok(1));
    }

    #[test]
    fn test_negative_angle() {
        assert_eq!(segment_index(-FRAC_PI_4, 4), Ok(0));
        assert_eq!(segment_index(-PI - FRAC_PI_4, 4), Ok(2));
    }

    #[test]
    fn test_large_angle() {
        let angle = 1000.0 * TAU + PI + 0.3;
        assert_eq!(segment_index(angle, 4), segment_index(PI + 0.3, 4));
        assert_eq!(segment_index(angle, 4), Ok(1));
    }

    #[test]
    fn test_single_segment_always_zero() {
        for angle in [0.0, 0.3, PI, 5.9, -2.0, 77.7] {
            assert_eq!(segment_index(angle, 1), Ok(0));
        }
    }

    #[test]
    fn test_zero_segments_rejected() {
        assert_eq!(segment_index(1.0, 0), Err(GeometryError::NoSegments));
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        assert!(matches!(
            segment_index(f64::NAN, 3),
            Err(GeometryError::NonFiniteAngle(_))
        ));
        assert!(segment_index(f64::INFINITY, 3).is_err());
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(TAU), 0.0);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!(normalize_angle(-1e-300) < TAU);
    }

    #[test]
    fn test_segment_mid_and_start() {
        assert_eq!(segment_start(0, 4), Ok(0.0));
        assert_eq!(segment_start(2, 4), Ok(PI));
        assert_eq!(segment_mid(0, 4), Ok(FRAC_PI_4));
    }

    #[test]
    fn test_painted_mid_angle_lands_under_pointer() {
        // Rotating the wheel so a segment's mid angle sits at 0 selects that segment
        let n = 7;
        for i in 0..n {
            let mid = segment_mid(i, n).unwrap();
            assert_eq!(segment_index(-mid, n), Ok(i));
        }
    }

    proptest! {
        #[test]
        fn prop_index_in_range(angle in -1.0e6f64..1.0e6, n in 1usize..200) {
            let index = segment_index(angle, n).unwrap();
            prop_assert!(index < n);
        }

        #[test]
        fn prop_index_is_periodic(
            n in 1usize..64,
            k in 0usize..64,
            frac in 0.01f64..0.99,
            turns in -5i32..5,
        ) {
            let k = k % n;
            let span = segment_span(n).unwrap();
            // Wheel angle that puts the pointer `frac` of the way into segment k
            let base = TAU - (k as f64 + frac) * span;
            let shifted = base + turns as f64 * TAU;

            prop_assert_eq!(segment_index(base, n).unwrap(), k);
            prop_assert_eq!(segment_index(shifted, n).unwrap(), k);
            prop_assert_eq!(segment_index(base + TAU, n).unwrap(), k);
        }
    }
}

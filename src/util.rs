//! Math helpers shared by the input and drawing pipelines.
//!
//! This module provides:
//! - Linear interpolation and unit-interval clamping for pressure mapping
//! - Euclidean distance for segment interpolation and the movement filter

/// Linearly interpolates between `a` and `b`.
///
/// `t` is expected to be in the 0.0-1.0 range; callers clamp pressure with
/// [`clamp01`] before mapping it to a width or opacity.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamps a value to the unit interval.
///
/// Pressure values arriving from the input boundary may be slightly out of
/// range on noisy drivers; everything downstream assumes [0, 1].
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Euclidean distance between two points.
pub fn distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn clamp01_limits_out_of_range_pressure() {
        assert_eq!(clamp01(-0.25), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(0.42), 0.42);
    }

    #[test]
    fn distance_matches_pythagoras() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0), 0.0);
    }
}

#![deny(clippy::pedantic)]
#![cfg_attr(not(test), no_std)]

//! The scalar maths interface shared by all backends.
//!
//! A backend is an uninhabited marker type implementing [`MathsCore`]. It is
//! only ever used as a type parameter, so that the choice of backend is made
//! at compile time and every call is statically dispatched.

pub trait MathsCore: 'static + Clone + core::fmt::Debug {
    /// Square root, `NaN` for negative inputs.
    #[must_use]
    fn sqrt(x: f32) -> f32;
    /// Two-argument arctangent of `y / x`, in radians.
    ///
    /// The first argument is the ordinate, as in C's `atan2f`.
    #[must_use]
    fn atan2(y: f32, x: f32) -> f32;
    #[must_use]
    fn pow(x: f32, y: f32) -> f32;
    #[must_use]
    fn sin(x: f32) -> f32;
    #[must_use]
    fn cos(x: f32) -> f32;

    /// Linearly maps `x` from the range `[y, z]` onto `[i, j]`.
    ///
    /// A zero-width source range (`y == z`) divides by zero and yields a
    /// non-finite result.
    #[must_use]
    #[inline]
    fn remap(x: f32, y: f32, z: f32, i: f32, j: f32) -> f32 {
        i + (x - y) * (j - i) / (z - y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::MathsCore;

    #[derive(Clone, Debug)]
    enum ArithmeticOnlyMathsCore {}

    impl MathsCore for ArithmeticOnlyMathsCore {
        fn sqrt(x: f32) -> f32 {
            x.sqrt()
        }

        fn atan2(y: f32, x: f32) -> f32 {
            y.atan2(x)
        }

        fn pow(x: f32, y: f32) -> f32 {
            x.powf(y)
        }

        fn sin(x: f32) -> f32 {
            x.sin()
        }

        fn cos(x: f32) -> f32 {
            x.cos()
        }
    }

    type M = ArithmeticOnlyMathsCore;

    #[test]
    fn test_remap_midpoint() {
        assert_relative_eq!(M::remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_remap_source_low_maps_to_destination_low() {
        assert_relative_eq!(M::remap(-3.0, -3.0, 7.0, 11.0, -2.0), 11.0);
        assert_relative_eq!(M::remap(0.25, 0.25, 0.5, -1.0, 1.0), -1.0);
    }

    #[test]
    fn test_remap_identity_range() {
        for x in [-2.5_f32, 0.0, 0.125, 1.0, 42.0] {
            assert_relative_eq!(M::remap(x, 0.0, 1.0, 0.0, 1.0), x);
        }
    }

    #[test]
    fn test_remap_inverted_destination() {
        assert_relative_eq!(M::remap(0.0, 0.0, 512.0, 1.0, -1.0), 1.0);
        assert_relative_eq!(M::remap(256.0, 0.0, 512.0, 1.0, -1.0), 0.0);
    }

    #[test]
    fn test_remap_zero_width_source_is_not_finite() {
        assert!(!M::remap(1.0, 2.0, 2.0, 0.0, 1.0).is_finite());
        assert!(M::remap(2.0, 2.0, 2.0, 0.0, 1.0).is_nan());
    }
}

use mandelbulb_core_maths::MathsCore;

/// Maths backend forwarding to the pure Rust `libm` port of musl.
///
/// Results do not depend on the platform's maths library.
#[derive(Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum SoftMathsCore {}

impl MathsCore for SoftMathsCore {
    #[inline]
    fn sqrt(x: f32) -> f32 {
        libm::sqrtf(x)
    }

    #[inline]
    fn atan2(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }

    #[inline]
    fn pow(x: f32, y: f32) -> f32 {
        libm::powf(x, y)
    }

    #[inline]
    fn sin(x: f32) -> f32 {
        libm::sinf(x)
    }

    #[inline]
    fn cos(x: f32) -> f32 {
        libm::cosf(x)
    }
}

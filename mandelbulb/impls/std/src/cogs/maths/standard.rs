use mandelbulb_core_maths::MathsCore;

/// Maths backend that forwards to the platform maths library through `std`.
///
/// `sin` and `cos` are evaluated in `f64` and narrowed back to `f32`.
#[derive(Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum StdMathsCore {}

impl MathsCore for StdMathsCore {
    #[inline]
    fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }

    #[inline]
    fn atan2(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }

    #[inline]
    fn pow(x: f32, y: f32) -> f32 {
        x.powf(y)
    }

    #[inline]
    fn sin(x: f32) -> f32 {
        #[allow(clippy::cast_possible_truncation)]
        {
            f64::from(x).sin() as f32
        }
    }

    #[inline]
    fn cos(x: f32) -> f32 {
        #[allow(clippy::cast_possible_truncation)]
        {
            f64::from(x).cos() as f32
        }
    }
}

#![deny(clippy::pedantic)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Flat scalar maths functions backed by a backend chosen at build time.
//!
//! The `std` feature (enabled by default) selects
//! [`StdMathsCore`](mandelbulb_impls_std::cogs::maths::standard::StdMathsCore),
//! which forwards to the platform maths library. The `soft` feature selects
//! [`SoftMathsCore`](mandelbulb_impls_no_std::cogs::maths::soft::SoftMathsCore),
//! which forwards to the pure Rust `libm` crate, and takes precedence
//! when both features are enabled.
//!
//! None of the functions report errors: out-of-domain inputs produce `NaN` or
//! an infinity, which is passed on unchanged.

#[cfg(not(any(feature = "std", feature = "soft")))]
compile_error!("either the `std` or the `soft` feature must be enabled to select a maths backend");

pub use mandelbulb_core_maths::MathsCore;

#[cfg(feature = "soft")]
pub type SelectedMathsCore = mandelbulb_impls_no_std::cogs::maths::soft::SoftMathsCore;

#[cfg(all(feature = "std", not(feature = "soft")))]
pub type SelectedMathsCore = mandelbulb_impls_std::cogs::maths::standard::StdMathsCore;

/// Short name of the backend selected at build time.
#[must_use]
pub const fn backend_name() -> &'static str {
    if cfg!(feature = "soft") {
        "soft"
    } else {
        "std"
    }
}

/// Square root, `NaN` for `x < 0`.
#[must_use]
#[inline]
pub fn square_root(x: f32) -> f32 {
    SelectedMathsCore::sqrt(x)
}

/// Angle of the point `(x, y)` in radians, within `[-π, π]`.
#[must_use]
#[inline]
pub fn arctangent2(y: f32, x: f32) -> f32 {
    SelectedMathsCore::atan2(y, x)
}

/// `x` raised to the power `y`, `NaN` for a negative base with a non-integer
/// exponent.
#[must_use]
#[inline]
pub fn power(x: f32, y: f32) -> f32 {
    SelectedMathsCore::pow(x, y)
}

#[must_use]
#[inline]
pub fn sine(x: f32) -> f32 {
    SelectedMathsCore::sin(x)
}

#[must_use]
#[inline]
pub fn cosine(x: f32) -> f32 {
    SelectedMathsCore::cos(x)
}

/// Linearly maps `x` from `[y, z]` onto `[i, j]`, non-finite for `y == z`.
#[must_use]
#[inline]
pub fn remap(x: f32, y: f32, z: f32, i: f32, j: f32) -> f32 {
    SelectedMathsCore::remap(x, y, z, i, j)
}

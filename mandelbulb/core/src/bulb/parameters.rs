use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use mandelbulb_core_bond::{Interval, PositiveF32};

/// Sampling parameters, deserialised with a default for every missing field.
///
/// Unknown fields are ignored so that the parameters can be read out of a
/// larger configuration document.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::module_name_repetitions)]
pub struct MandelbulbParameters {
    /// Number of grid points along each axis
    pub resolution: NonZeroU32,
    /// Orbit length after which a point counts as bounded
    pub iterations: u32,
    pub exponent: f32,
    /// Polar radius beyond which an orbit has escaped
    pub bailout: PositiveF32,
    /// Extent of the sampled cube along every axis
    pub bounds: Interval,
}

impl Default for MandelbulbParameters {
    fn default() -> Self {
        Self {
            resolution: NonZeroU32::new(512).unwrap_or_else(|| unreachable!("512 is non-zero")),
            iterations: 20,
            exponent: 8.0,
            bailout: PositiveF32::new(2.0).unwrap_or_else(|_| unreachable!("2.0 is positive")),
            bounds: Interval::default(),
        }
    }
}

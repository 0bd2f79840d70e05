use core::{convert::TryFrom, fmt};

use serde::{Deserialize, Serialize};

use mandelbulb_core_maths::MathsCore;

#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct IntervalError {
    low: f32,
    high: f32,
}

impl fmt::Display for IntervalError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "[{}, {}] must have finite bounds and a non-zero width.",
            self.low, self.high
        )
    }
}

/// A closed range `[low, high]` with finite bounds and `low != high`.
///
/// `high < low` is allowed and describes a reversed axis.
#[derive(Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntervalRaw")]
pub struct Interval {
    low: f32,
    high: f32,
}

#[derive(Deserialize)]
#[serde(rename = "Interval")]
#[serde(deny_unknown_fields)]
struct IntervalRaw {
    low: f32,
    high: f32,
}

impl TryFrom<IntervalRaw> for Interval {
    type Error = IntervalError;

    fn try_from(raw: IntervalRaw) -> Result<Self, Self::Error> {
        Self::new(raw.low, raw.high)
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Interval[{}, {}]", self.low, self.high)
    }
}

impl Interval {
    /// # Errors
    ///
    /// Returns `IntervalError` if either bound is not finite or if
    /// `low == high`
    pub fn new(low: f32, high: f32) -> Result<Self, IntervalError> {
        if low.is_finite() && high.is_finite() && low != high {
            Ok(Self { low, high })
        } else {
            Err(IntervalError { low, high })
        }
    }

    #[must_use]
    pub fn low(self) -> f32 {
        self.low
    }

    #[must_use]
    pub fn high(self) -> f32 {
        self.high
    }

    /// Maps `x` from `[source_low, source_high]` onto this interval.
    #[must_use]
    #[inline]
    pub fn remap_from<M: MathsCore>(self, x: f32, source_low: f32, source_high: f32) -> f32 {
        M::remap(x, source_low, source_high, self.low, self.high)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self {
            low: -1.0,
            high: 1.0,
        }
    }
}

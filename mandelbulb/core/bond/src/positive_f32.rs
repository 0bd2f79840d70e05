use core::{cmp::Ordering, convert::TryFrom, fmt};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct PositiveF32Error(f32);

impl fmt::Display for PositiveF32Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} is not positive and finite.", self.0)
    }
}

#[derive(Copy, Clone, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "f32")]
pub struct PositiveF32(f32);

impl TryFrom<f32> for PositiveF32 {
    type Error = PositiveF32Error;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for PositiveF32 {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        struct PositiveF32Range(f32);

        impl fmt::Debug for PositiveF32Range {
            fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
                write!(fmt, "0.0 < {} < inf", self.0)
            }
        }

        fmt.debug_tuple("PositiveF32")
            .field(&PositiveF32Range(self.0))
            .finish()
    }
}

impl fmt::Display for PositiveF32 {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(fmt)
    }
}

impl PositiveF32 {
    /// # Errors
    ///
    /// Returns `PositiveF32Error` if not `0.0 < value < inf`
    pub fn new(value: f32) -> Result<Self, PositiveF32Error> {
        if value > 0.0 && value.is_finite() {
            Ok(Self(value))
        } else {
            Err(PositiveF32Error(value))
        }
    }

    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl PartialEq for PositiveF32 {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl PartialOrd for PositiveF32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl PartialEq<f32> for PositiveF32 {
    fn eq(&self, other: &f32) -> bool {
        self.0.eq(other)
    }
}

impl PartialOrd<f32> for PositiveF32 {
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

#[cfg(test)]
mod tests {
    use super::PositiveF32;

    #[test]
    fn test_accepts_positive_finite() {
        assert_eq!(PositiveF32::new(2.0).unwrap().get(), 2.0);
        assert!(PositiveF32::new(f32::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_rejects_other_values() {
        assert!(PositiveF32::new(0.0).is_err());
        assert!(PositiveF32::new(-1.0).is_err());
        assert!(PositiveF32::new(f32::INFINITY).is_err());
        assert!(PositiveF32::new(f32::NAN).is_err());
    }

    #[test]
    fn test_comparison_with_raw_values() {
        let bailout = PositiveF32::new(2.0).unwrap();
        assert!(bailout < 2.5_f32);
        assert!(bailout > 1.0_f32);
        assert!(bailout == 2.0_f32);
    }

    #[test]
    fn test_deserialize_validates() {
        assert_eq!(ron::from_str::<PositiveF32>("4.0").unwrap(), 4.0_f32);

        let err = ron::from_str::<PositiveF32>("-4.0").unwrap_err();
        assert!(err.to_string().contains("-4 is not positive and finite."));
    }
}

#![deny(clippy::pedantic)]
#![cfg_attr(not(test), no_std)]

mod interval;
mod positive_f32;

pub use interval::{Interval, IntervalError};
pub use positive_f32::{PositiveF32, PositiveF32Error};

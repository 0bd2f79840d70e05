#![deny(clippy::pedantic)]
#![cfg_attr(not(test), no_std)]

//! Point-cloud sampling of the Mandelbulb fractal.
//!
//! The sampler is generic over a [`MathsCore`](mandelbulb_core_maths::MathsCore)
//! backend, which provides every transcendental function it evaluates.

#[macro_use]
extern crate contracts;

pub mod bulb;
pub mod vector;

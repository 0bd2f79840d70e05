#![deny(clippy::pedantic)]
#![cfg_attr(not(test), no_std)]

pub mod cogs;

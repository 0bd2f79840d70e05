#![deny(clippy::pedantic)]

pub mod cogs;

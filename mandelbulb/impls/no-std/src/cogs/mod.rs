pub mod maths;

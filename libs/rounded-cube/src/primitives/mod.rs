//! # Primitives
//!
//! Mesh generation for the rounded-cube primitive.

pub mod rounded_cube;

pub use rounded_cube::{create_rounded_cube, RoundedCube};

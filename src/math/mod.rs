//! Dense numeric containers.
//!
//! Provides `Matrix` (2D, row-major) and `Vector` (1D) over any [`Scalar`]
//! element type, plus the `fma` primitive used for every accumulation.
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use matrix::Matrix;
pub use scalar::{fma, to_f64, Scalar};
pub use vector::Vector;

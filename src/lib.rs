//! dense-linalg: small dense linear algebra with an elimination engine.
//!
//! This crate provides generic `Vector` and `Matrix` containers with
//! element-wise arithmetic, norms, dot/cross products and linear maps, and the
//! matrix reduction family built on Gaussian elimination: row echelon form,
//! rank, determinant and inverse.
//!
//! Container arithmetic comes in two families: `&mut self` mutators (`add`,
//! `sub`, `scl`) that update the receiver in place, and `&self` operations that
//! return fresh values (`transpose`, `mul_mat`, `row_echelon`, `inverse`, ...).
pub mod config;
pub mod error;
pub mod interop;
pub mod logging;
pub mod math;
pub mod ops;
pub mod reduction;

pub use config::{load_reduction_config, PivotStrategy, ReductionConfig};
pub use error::{LinalgError, Result};
pub use math::{fma, Matrix, Scalar, Vector};
pub use ops::{angle_cos, cross_product, lerp, linear_combination, Interpolant};

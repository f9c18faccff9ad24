//! Elimination-based matrix reductions.
//!
//! All engines work on a private `f64` copy of the input, except the cofactor
//! determinant which stays in the element type. The methods are attached to
//! [`Matrix`](crate::math::Matrix) directly:
//!
//! - `row_echelon`, `is_row_echelon_form`, `rank` in [`echelon`]
//! - `determinant`, `determinant_lu` in [`determinant`]
//! - `inverse` in [`inverse`]
pub mod determinant;
pub mod echelon;
pub mod inverse;

//! Higher-level vector operations built on the containers.
pub mod combination;
pub mod geometry;
pub mod interpolation;

pub use combination::linear_combination;
pub use geometry::{angle_cos, cross_product};
pub use interpolation::{lerp, Interpolant};

use num_traits::Float;

use crate::error::{LinalgError, Result};
use crate::math::scalar::fma;
use crate::math::{Matrix, Scalar, Vector};

/// Value that [`lerp`] can interpolate: a scalar, a vector or a matrix.
#[derive(Clone, Debug, PartialEq)]
pub enum Interpolant<T> {
    Scalar(T),
    Vector(Vector<T>),
    Matrix(Matrix<T>),
}

impl<T> Interpolant<T> {
    pub fn scalar(value: T) -> Self {
        Interpolant::Scalar(value)
    }

    fn kind(&self) -> &'static str {
        match self {
            Interpolant::Scalar(_) => "scalar",
            Interpolant::Vector(_) => "vector",
            Interpolant::Matrix(_) => "matrix",
        }
    }
}

impl<T> From<Vector<T>> for Interpolant<T> {
    fn from(value: Vector<T>) -> Self {
        Interpolant::Vector(value)
    }
}

impl<T> From<Matrix<T>> for Interpolant<T> {
    fn from(value: Matrix<T>) -> Self {
        Interpolant::Matrix(value)
    }
}

#[inline]
fn lerp_value<T: Scalar + Float>(u: T, v: T, t: T) -> T {
    fma(t, v - u, u)
}

/// Linear interpolation `u + t * (v - u)`.
///
/// Both ends must be the same kind and shape. `t` is not clamped, so values
/// outside `[0, 1]` extrapolate.
pub fn lerp<T: Scalar + Float>(
    u: &Interpolant<T>,
    v: &Interpolant<T>,
    t: T,
) -> Result<Interpolant<T>> {
    match (u, v) {
        (Interpolant::Scalar(a), Interpolant::Scalar(b)) => {
            Ok(Interpolant::Scalar(lerp_value(*a, *b, t)))
        }
        (Interpolant::Vector(a), Interpolant::Vector(b)) => {
            a.check_same_len("lerp", b)?;
            Ok(Interpolant::Vector(
                a.iter()
                    .zip(b.iter())
                    .map(|(&x, &y)| lerp_value(x, y, t))
                    .collect(),
            ))
        }
        (Interpolant::Matrix(a), Interpolant::Matrix(b)) => {
            if a.shape() != b.shape() {
                return Err(LinalgError::dimension_mismatch("lerp", a.shape(), b.shape()));
            }
            let data = a
                .as_slice()
                .iter()
                .zip(b.as_slice())
                .map(|(&x, &y)| lerp_value(x, y, t))
                .collect();
            Ok(Interpolant::Matrix(Matrix::from_shape_vec(a.shape(), data)?))
        }
        _ => {
            log::debug!("lerp: cannot mix {} and {}", u.kind(), v.kind());
            Err(LinalgError::TypeMismatch { op: "lerp" })
        }
    }
}

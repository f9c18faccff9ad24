use crate::error::{LinalgError, Result};
use crate::math::scalar::fma;
use crate::math::{Scalar, Vector};

/// `sum_i scalars[i] * vectors[i]`, accumulated with [`fma`].
///
/// All vectors must share one length, and there must be exactly one scalar
/// per vector.
pub fn linear_combination<T: Scalar>(vectors: &[Vector<T>], scalars: &[T]) -> Result<Vector<T>> {
    if vectors.len() != scalars.len() {
        return Err(LinalgError::dimension_mismatch(
            "linear_combination",
            vectors.len(),
            scalars.len(),
        ));
    }
    let first = vectors.first().ok_or(LinalgError::EmptyInput {
        op: "linear_combination",
    })?;

    let mut result = Vector::zeros(first.len());
    for (vector, &scalar) in vectors.iter().zip(scalars) {
        result.check_same_len("linear_combination", vector)?;
        for (acc, &value) in result.iter_mut().zip(vector.iter()) {
            *acc = fma(scalar, value, *acc);
        }
    }
    Ok(result)
}

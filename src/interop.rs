//! Conversions to and from `ndarray` containers.
//!
//! Both directions preserve shape and logical row-major order, whatever the
//! memory layout of the `ndarray` side.

use ndarray::{Array1, Array2};

use crate::math::{Matrix, Vector};

impl<T: Clone> From<Array2<T>> for Matrix<T> {
    fn from(value: Array2<T>) -> Self {
        let (rows, cols) = value.dim();
        // `iter()` walks in logical order, whatever the strides.
        Matrix::from_raw(rows, cols, value.iter().cloned().collect())
    }
}

impl<T: Clone> From<Matrix<T>> for Array2<T> {
    fn from(value: Matrix<T>) -> Self {
        Array2::from_shape_fn(value.shape(), |(r, c)| value[(r, c)].clone())
    }
}

impl<T: Clone> From<Array1<T>> for Vector<T> {
    fn from(value: Array1<T>) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T> From<Vector<T>> for Array1<T> {
    fn from(value: Vector<T>) -> Self {
        Array1::from_vec(value.into())
    }
}

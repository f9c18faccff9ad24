use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut, Neg};
use std::slice::{Iter, IterMut};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;
use crate::math::scalar::{fma, to_f64, Scalar};

/// Fixed-length column of numeric elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn shape(&self) -> (usize,) {
        (self.len(),)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Checked element read.
    pub fn get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.data
            .get(index)
            .cloned()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Checked element write.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.len() {
            return Err(self.out_of_bounds(index));
        }
        self.data[index] = value;
        Ok(())
    }

    /// Reshape into a `rows x cols` matrix, filling row by row.
    pub fn to_matrix(&self, rows: usize, cols: usize) -> Result<Matrix<T>>
    where
        T: Clone,
    {
        if rows * cols != self.len() {
            return Err(LinalgError::dimension_mismatch(
                "to_matrix",
                self.len(),
                (rows, cols),
            ));
        }
        Matrix::from_shape_vec((rows, cols), self.data.clone())
    }

    fn out_of_bounds(&self, index: usize) -> LinalgError {
        LinalgError::IndexOutOfBounds {
            index: vec![index],
            shape: vec![self.len()],
        }
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    pub fn from_elem(len: usize, value: T) -> Self {
        Vector::from_vec(vec![value; len])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T> Vector<T>
where
    T: Clone + One,
{
    pub fn ones(len: usize) -> Self {
        Vector::from_vec(vec![T::one(); len])
    }
}

// In-place arithmetic. These mutate the receiver and hand it back for chaining.
impl<T: Scalar> Vector<T> {
    pub fn add(&mut self, other: &Vector<T>) -> Result<&mut Self> {
        self.check_same_len("add", other)?;
        for (lhs, rhs) in self.data.iter_mut().zip(other.iter()) {
            *lhs = *lhs + *rhs;
        }
        Ok(self)
    }

    pub fn sub(&mut self, other: &Vector<T>) -> Result<&mut Self> {
        self.check_same_len("sub", other)?;
        for (lhs, rhs) in self.data.iter_mut().zip(other.iter()) {
            *lhs = *lhs - *rhs;
        }
        Ok(self)
    }

    pub fn scl(&mut self, scalar: T) -> &mut Self {
        for value in self.data.iter_mut() {
            *value = *value * scalar;
        }
        self
    }
}

// Pure operations returning fresh values.
impl<T: Scalar> Vector<T> {
    /// Sum of element-wise products, accumulated with [`fma`].
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_same_len("dot", other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| fma(a, b, acc)))
    }

    /// Taxicab norm: sum of absolute values.
    pub fn norm_1(&self) -> f64 {
        self.iter().map(|&v| to_f64(v).abs()).sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.iter()
            .map(|&v| to_f64(v))
            .fold(0.0, |acc, v| fma(v, v, acc))
            .sqrt()
    }

    /// Maximum absolute value; `0.0` for an empty vector.
    pub fn norm_inf(&self) -> f64 {
        self.iter()
            .map(|&v| to_f64(v).abs())
            .fold(0.0, f64::max)
    }

    pub fn to_f64(&self) -> Vector<f64> {
        self.mapv(|&v| to_f64(v))
    }

    pub(crate) fn check_same_len(&self, op: &'static str, other: &Vector<T>) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::dimension_mismatch(op, self.len(), other.len()));
        }
        Ok(())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.mapv(|&v| -v)
    }
}

impl<'a, T: Scalar> Neg for &'a Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.mapv(|&v| -v)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::scalar::{fma, to_f64, Scalar};
use crate::math::vector::Vector;

/// Row-major dense matrix. Every row has the same length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr<T>")]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Unchecked wire form; shape is re-validated on the way in.
#[derive(Deserialize)]
struct MatrixRepr<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> TryFrom<MatrixRepr<T>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(repr: MatrixRepr<T>) -> Result<Self> {
        Matrix::from_shape_vec((repr.rows, repr.cols), repr.data)
    }
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(LinalgError::dimension_mismatch(
                "from_shape_vec",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build from nested rows. Ragged input is rejected.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(LinalgError::DimensionMismatch {
                    op: "from_rows",
                    expected: format!("{} columns", ncols),
                    got: format!("{} columns in row {}", row.len(), idx),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    pub fn column(&self, col: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        let mut values = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            values.push(self[(row, col)].clone());
        }
        Vector::from_vec(values)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Flatten row by row.
    pub fn to_vector(&self) -> Vector<T>
    where
        T: Clone,
    {
        Vector::from_vec(self.data.clone())
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<T>
    where
        T: Clone,
    {
        self.check_index(row, col)?;
        Ok(self[(row, col)].clone())
    }

    /// Checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_index(row, col)?;
        self[(row, col)] = value;
        Ok(())
    }

    /// Copy of this matrix without `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix<T>
    where
        T: Clone,
    {
        assert!(
            row < self.rows && col < self.cols,
            "minor index out of bounds"
        );
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in (0..self.rows).filter(|&r| r != row) {
            for (c, value) in self.row_slice(r).iter().enumerate() {
                if c != col {
                    data.push(value.clone());
                }
            }
        }
        Matrix {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            let (ia, ib) = (self.offset(a, col), self.offset(b, col));
            self.data.swap(ia, ib);
        }
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LinalgError::IndexOutOfBounds {
                index: vec![row, col],
                shape: vec![self.rows, self.cols],
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, op: &'static str, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::dimension_mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }

    /// Order of a non-empty square matrix.
    pub(crate) fn require_square(&self, op: &'static str) -> Result<usize> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch {
                op,
                expected: "square matrix".to_string(),
                got: format!("{:?}", self.shape()),
            });
        }
        if self.rows == 0 {
            return Err(LinalgError::EmptyMatrix { op });
        }
        Ok(self.rows)
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

// In-place arithmetic. These mutate the receiver and hand it back for chaining.
impl<T: Scalar> Matrix<T> {
    pub fn add(&mut self, other: &Matrix<T>) -> Result<&mut Self> {
        self.check_same_shape("add", other)?;
        for (lhs, rhs) in self.data.iter_mut().zip(other.data.iter()) {
            *lhs = *lhs + *rhs;
        }
        Ok(self)
    }

    pub fn sub(&mut self, other: &Matrix<T>) -> Result<&mut Self> {
        self.check_same_shape("sub", other)?;
        for (lhs, rhs) in self.data.iter_mut().zip(other.data.iter()) {
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
impl<T: Scalar> Matrix<T> {
    /// Sum of the main diagonal.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch {
                op: "trace",
                expected: "square matrix".to_string(),
                got: format!("{:?}", self.shape()),
            });
        }
        Ok((0..self.rows).fold(T::zero(), |acc, i| acc + self[(i, i)]))
    }

    /// Apply this matrix as a linear map to `vector`.
    pub fn mul_vec(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        if self.cols != vector.len() {
            return Err(LinalgError::dimension_mismatch(
                "mul_vec",
                self.cols,
                vector.len(),
            ));
        }
        Ok((0..self.rows)
            .map(|row| {
                self.row_slice(row)
                    .iter()
                    .zip(vector.iter())
                    .fold(T::zero(), |acc, (&a, &b)| fma(a, b, acc))
            })
            .collect())
    }

    pub fn mul_mat(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != other.rows {
            return Err(LinalgError::DimensionMismatch {
                op: "mul_mat",
                expected: format!("{} rows", self.cols),
                got: format!("{:?}", other.shape()),
            });
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                out[(i, j)] = (0..self.cols)
                    .fold(T::zero(), |acc, k| fma(self[(i, k)], other[(k, j)], acc));
            }
        }
        Ok(out)
    }

    pub fn to_f64(&self) -> Matrix<f64> {
        self.mapv(|&v| to_f64(v))
    }

    pub(crate) fn scale_row(&mut self, row: usize, factor: T) {
        for value in self.row_slice_mut(row) {
            *value = *value * factor;
        }
    }

    /// `row[target] += factor * row[source]`
    pub(crate) fn add_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        for col in 0..self.cols {
            let src = self.data[self.offset(source, col)];
            let dst = self.offset(target, col);
            self.data[dst] = fma(factor, src, self.data[dst]);
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

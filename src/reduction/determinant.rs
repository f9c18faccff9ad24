//! Determinant by cofactor expansion, plus an LU fast path.

use crate::error::Result;
use crate::math::scalar::fma;
use crate::math::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Determinant by recursive Laplace expansion along the first row.
    ///
    /// Stays in the element type, so integer matrices give exact integer
    /// results. The cost is factorial in the order of the matrix; use
    /// [`Matrix::determinant_lu`] beyond a handful of rows.
    ///
    /// Integer arithmetic is unchecked: the determinant and every partial
    /// product must fit in `T`. Overflow panics in debug builds and wraps in
    /// release builds. Widen first (`m.mapv(|&v| i64::from(v))`) or use
    /// [`Matrix::determinant_lu`] when entries are large.
    pub fn determinant(&self) -> Result<T> {
        let n = self.require_square("determinant")?;
        log::trace!("determinant: cofactor expansion of order {}", n);
        Ok(cofactor_expansion(self))
    }

    /// Determinant from an LU decomposition with partial pivoting.
    ///
    /// `det = (-1)^swaps * prod(U[i][i])`. Agrees with [`Matrix::determinant`]
    /// up to floating-point rounding.
    pub fn determinant_lu(&self) -> Result<f64> {
        let n = self.require_square("determinant_lu")?;
        let mut lu = self.to_f64();
        let mut num_swaps = 0usize;

        for col in 0..n {
            let mut pivot_row = col;
            let mut max_val = lu[(col, col)].abs();
            for row in (col + 1)..n {
                let val = lu[(row, col)].abs();
                if val > max_val {
                    max_val = val;
                    pivot_row = row;
                }
            }

            if max_val == 0.0 {
                log::debug!("determinant_lu: column {} has no pivot, matrix is singular", col);
                return Ok(0.0);
            }

            if pivot_row != col {
                lu.swap_rows(col, pivot_row);
                num_swaps += 1;
            }

            let pivot = lu[(col, col)];
            for row in (col + 1)..n {
                let multiplier = lu[(row, col)] / pivot;
                if multiplier != 0.0 {
                    lu.add_scaled_row(row, col, -multiplier);
                }
            }
        }

        let sign = if num_swaps % 2 == 0 { 1.0 } else { -1.0 };
        let det = (0..n).fold(sign, |acc, i| acc * lu[(i, i)]);
        log::debug!(
            "determinant_lu: order {} with {} row swaps gives {}",
            n,
            num_swaps,
            det
        );
        Ok(det)
    }
}

fn cofactor_expansion<T: Scalar>(m: &Matrix<T>) -> T {
    match m.nrows() {
        1 => m[(0, 0)],
        2 => fma(m[(0, 0)], m[(1, 1)], -(m[(0, 1)] * m[(1, 0)])),
        n => (0..n).fold(T::zero(), |acc, col| {
            let entry = if col % 2 == 0 { m[(0, col)] } else { -m[(0, col)] };
            fma(entry, cofactor_expansion(&m.minor(0, col)), acc)
        }),
    }
}

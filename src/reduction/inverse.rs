//! Inverse by Gauss-Jordan elimination on `[A | I]`.

use crate::config::{PivotStrategy, ReductionConfig};
use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Scalar};
use crate::reduction::echelon::find_pivot;

impl<T: Scalar> Matrix<T> {
    /// Inverse of a square matrix.
    ///
    /// Fails with [`LinalgError::NotInvertible`] as soon as a column has no
    /// non-zero entry on or below the diagonal.
    pub fn inverse(&self) -> Result<Matrix<f64>> {
        self.inverse_with(&ReductionConfig::default())
    }

    /// [`Matrix::inverse`] under `config`. Fails with
    /// [`LinalgError::InvalidConfig`] before touching the matrix if the config
    /// does not validate.
    pub fn inverse_with(&self, config: &ReductionConfig) -> Result<Matrix<f64>> {
        config.validate()?;
        let n = self.require_square("inverse")?;
        let mut work = self.to_f64();
        let mut inv = Matrix::<f64>::identity(n);

        // Forward pass: unit diagonal, zeros below.
        for i in 0..n {
            let search_from = match config.pivot_strategy {
                PivotStrategy::FirstNonZero if !config.is_negligible(work[(i, i)]) => None,
                PivotStrategy::FirstNonZero => Some(i + 1),
                PivotStrategy::MaxAbs => Some(i),
            };
            if let Some(from) = search_from {
                let Some(j) = find_pivot(&work, i, from, config) else {
                    log::warn!("inverse: singular matrix, column {} has no pivot", i);
                    return Err(LinalgError::NotInvertible { column: i });
                };
                if j != i {
                    log::trace!("inverse: swapping rows {} and {}", i, j);
                    work.swap_rows(i, j);
                    inv.swap_rows(i, j);
                }
            }

            let scale = 1.0 / work[(i, i)];
            work.scale_row(i, scale);
            inv.scale_row(i, scale);
            work[(i, i)] = 1.0;

            for j in (i + 1)..n {
                eliminate(&mut work, &mut inv, j, i);
            }
        }

        // Backward pass: zeros above.
        for i in (0..n).rev() {
            for j in 0..i {
                eliminate(&mut work, &mut inv, j, i);
            }
        }

        log::debug!("inverse: inverted matrix of order {}", n);
        Ok(inv)
    }
}

/// Subtract `work[target][pivot] x row pivot` from row `target` of both halves.
fn eliminate(work: &mut Matrix<f64>, inv: &mut Matrix<f64>, target: usize, pivot: usize) {
    let factor = work[(target, pivot)];
    if factor == 0.0 {
        return;
    }
    work.add_scaled_row(target, pivot, -factor);
    inv.add_scaled_row(target, pivot, -factor);
    work[(target, pivot)] = 0.0;
}

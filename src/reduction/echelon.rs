//! Row echelon reduction and rank.

use num_traits::Zero;

use crate::config::{PivotStrategy, ReductionConfig};
use crate::error::Result;
use crate::math::{Matrix, Scalar};

/// Pick the pivot row for `col` among rows `from..nrows`.
pub(crate) fn find_pivot(
    work: &Matrix<f64>,
    col: usize,
    from: usize,
    config: &ReductionConfig,
) -> Option<usize> {
    let mut candidates =
        (from..work.nrows()).filter(|&row| !config.is_negligible(work[(row, col)]));
    match config.pivot_strategy {
        PivotStrategy::FirstNonZero => candidates.next(),
        PivotStrategy::MaxAbs => candidates.fold(None, |best: Option<usize>, row| match best {
            Some(b) if work[(b, col)].abs() >= work[(row, col)].abs() => Some(b),
            _ => Some(row),
        }),
    }
}

/// Forward elimination in place. Returns the number of pivots found.
///
/// Entries at or below the cursor that the config treats as negligible are
/// written back as exact `0.0`, so the result satisfies
/// [`Matrix::is_row_echelon_form`] under any tolerance.
pub(crate) fn reduce_in_place(work: &mut Matrix<f64>, config: &ReductionConfig) -> usize {
    let (rows, cols) = work.shape();
    let mut cursor = 0;

    for col in 0..cols {
        if cursor >= rows {
            break;
        }
        let Some(pivot_row) = find_pivot(work, col, cursor, config) else {
            log::trace!("row_echelon: column {} has no pivot", col);
            for row in cursor..rows {
                work[(row, col)] = 0.0;
            }
            continue;
        };
        work.swap_rows(pivot_row, cursor);

        let pivot = work[(cursor, col)];
        for value in work.row_slice_mut(cursor) {
            *value /= pivot;
        }
        work[(cursor, col)] = 1.0;
        log::trace!("row_echelon: pivot {} at ({}, {})", pivot, cursor, col);

        for row in cursor + 1..rows {
            let factor = work[(row, col)];
            if factor != 0.0 {
                work.add_scaled_row(row, cursor, -factor);
            }
            work[(row, col)] = 0.0;
            flush_negligible(work, row, config);
        }
        cursor += 1;
    }
    cursor
}

fn flush_negligible(work: &mut Matrix<f64>, row: usize, config: &ReductionConfig) {
    for value in work.row_slice_mut(row) {
        if config.is_negligible(*value) {
            *value = 0.0;
        }
    }
}

fn is_zero_row(work: &Matrix<f64>, row: usize, config: &ReductionConfig) -> bool {
    work.row_slice(row).iter().all(|&v| config.is_negligible(v))
}

impl<T: Scalar> Matrix<T> {
    /// Row echelon form (not reduced upward). Every pivot is exactly `1.0`.
    pub fn row_echelon(&self) -> Matrix<f64> {
        self.reduce(&ReductionConfig::default())
    }

    /// [`Matrix::row_echelon`] under `config`. The config is validated first
    /// and rejected with [`LinalgError::InvalidConfig`](crate::LinalgError::InvalidConfig).
    pub fn row_echelon_with(&self, config: &ReductionConfig) -> Result<Matrix<f64>> {
        config.validate()?;
        Ok(self.reduce(config))
    }

    fn reduce(&self, config: &ReductionConfig) -> Matrix<f64> {
        let mut work = self.to_f64();
        let pivots = reduce_in_place(&mut work, config);
        log::debug!(
            "row_echelon: {:?} matrix reduced with {} pivots",
            self.shape(),
            pivots
        );
        work
    }

    /// Whether leading entries move strictly right row over row, with every
    /// all-zero row below the non-zero ones.
    pub fn is_row_echelon_form(&self) -> bool {
        let mut prev_pivot: Option<usize> = None;
        let mut seen_zero_row = false;

        for row in 0..self.nrows() {
            let leading = self.row_slice(row).iter().position(|v| !v.is_zero());
            match leading {
                None => seen_zero_row = true,
                Some(_) if seen_zero_row => return false,
                Some(col) => {
                    if prev_pivot.map_or(false, |prev| col <= prev) {
                        return false;
                    }
                    prev_pivot = Some(col);
                }
            }
        }
        true
    }

    /// Number of non-zero rows in the row echelon form.
    pub fn rank(&self) -> usize {
        self.rank_under(&ReductionConfig::default())
    }

    /// [`Matrix::rank`] under `config`; rows whose entries are all negligible
    /// count as zero. Fails with `InvalidConfig` before any work is done.
    pub fn rank_with(&self, config: &ReductionConfig) -> Result<usize> {
        config.validate()?;
        Ok(self.rank_under(config))
    }

    fn rank_under(&self, config: &ReductionConfig) -> usize {
        let work = self.reduce(config);
        let rank = count_nonzero_rows(&work, config);
        log::debug!("rank: {:?} matrix has rank {}", self.shape(), rank);
        rank
    }
}

fn count_nonzero_rows(work: &Matrix<f64>, config: &ReductionConfig) -> usize {
    (0..work.nrows())
        .filter(|&row| !is_zero_row(work, row, config))
        .count()
}

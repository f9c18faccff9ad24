use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::LinalgError;

/// Settings shared by the elimination engines (row echelon, rank, inverse).
///
/// The default reproduces the plain textbook behaviour: the first row with a
/// non-zero entry becomes the pivot, and only an exact `0.0` counts as zero.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReductionConfig {
    /// Entries with `|x| <= pivot_tolerance` are treated as zero.
    pub pivot_tolerance: f64,

    /// Pivot row selection, see [`PivotStrategy`].
    pub pivot_strategy: PivotStrategy,
}

/// How a pivot row is chosen among the candidates of a column.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    /// First candidate row with a non-zero entry.
    #[default]
    FirstNonZero,
    /// Candidate row with the largest absolute entry (partial pivoting).
    MaxAbs,
}

impl FromStr for PivotStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_nonzero" | "first" => Ok(PivotStrategy::FirstNonZero),
            "max_abs" | "partial" => Ok(PivotStrategy::MaxAbs),
            _ => Err(format!(
                "Unknown pivot strategy: {}. Expected one of: first_nonzero, max_abs",
                s
            )),
        }
    }
}

impl ReductionConfig {
    /// Config with the given tolerance and strategy. Not validated here.
    pub fn new(pivot_tolerance: f64, pivot_strategy: PivotStrategy) -> Self {
        Self {
            pivot_tolerance,
            pivot_strategy,
        }
    }

    /// Check that `pivot_tolerance` is finite and non-negative, returning
    /// [`LinalgError::InvalidConfig`] otherwise. Every `*_with` engine runs
    /// this first.
    pub fn validate(&self) -> Result<(), LinalgError> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(LinalgError::InvalidConfig(format!(
                "pivot_tolerance must be a finite non-negative number, got {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }

    /// Whether `value` is too small to serve as a pivot.
    #[inline]
    pub fn is_negligible(&self, value: f64) -> bool {
        value == 0.0 || value.abs() <= self.pivot_tolerance
    }
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: 0.0,
            pivot_strategy: PivotStrategy::FirstNonZero,
        }
    }
}

/// Load a reduction configuration from a JSON file.
pub fn load_reduction_config<P: AsRef<Path>>(path: P) -> Result<ReductionConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ReductionConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded reduction config from {}: {:?}",
        path.as_ref().display(),
        config
    );
    Ok(config)
}

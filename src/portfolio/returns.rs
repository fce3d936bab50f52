//! # Return Table
//!
//! $$
//! R\in\mathbb R^{T\times N},\quad T\ge 2
//! $$
//!
//! Asset-labelled returns matrix. Rows are observations, columns are assets.

use std::collections::HashSet;

use ndarray::Array2;

use crate::error::MeanVarianceError;
use crate::error::Result;
use crate::optimization::moments::validate_returns;

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnTable {
  assets: Vec<String>,
  returns: Array2<f64>,
}

impl ReturnTable {
  /// Pair asset labels with the columns of `returns`.
  ///
  /// Labels must be unique and match the column count; the matrix needs at
  /// least two finite observations.
  pub fn new<S: Into<String>>(
    assets: impl IntoIterator<Item = S>,
    returns: Array2<f64>,
  ) -> Result<Self> {
    let assets: Vec<String> = assets.into_iter().map(Into::into).collect();
    if assets.len() != returns.ncols() {
      return Err(MeanVarianceError::DimensionMismatch {
        context: "asset labels vs return columns",
        expected: returns.ncols(),
        actual: assets.len(),
      });
    }

    let mut seen = HashSet::with_capacity(assets.len());
    for asset in &assets {
      if !seen.insert(asset.as_str()) {
        return Err(MeanVarianceError::DuplicateAsset(asset.clone()));
      }
    }

    validate_returns(&returns)?;
    Ok(Self { assets, returns })
  }

  /// Build from `(label, series)` columns of equal length.
  pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Result<Self> {
    let t = columns.first().map(|(_, s)| s.len()).unwrap_or(0);
    if let Some((_, s)) = columns.iter().find(|(_, s)| s.len() != t) {
      return Err(MeanVarianceError::DimensionMismatch {
        context: "return series length",
        expected: t,
        actual: s.len(),
      });
    }

    let n = columns.len();
    let returns = Array2::from_shape_fn((t, n), |(i, j)| columns[j].1[i]);
    Self::new(columns.into_iter().map(|(label, _)| label), returns)
  }

  pub fn assets(&self) -> &[String] {
    &self.assets
  }

  pub fn returns(&self) -> &Array2<f64> {
    &self.returns
  }

  pub fn n_assets(&self) -> usize {
    self.assets.len()
  }

  pub fn n_observations(&self) -> usize {
    self.returns.nrows()
  }

  pub fn position(&self, asset: &str) -> Option<usize> {
    self.assets.iter().position(|a| a == asset)
  }
}

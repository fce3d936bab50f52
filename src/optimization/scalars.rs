//! # Frontier Scalars
//!
//! $$
//! A=\mu^\top\Sigma^{-1}\mathbf 1,\quad B=\mu^\top\Sigma^{-1}\mu,\qquad
//! C=\mathbf 1^\top\Sigma^{-1}\mathbf 1,\quad D=BC-A^2
//! $$
//!

use ndarray::Array1;
use ndarray::Array2;
use tracing::debug;

use super::types::FrontierScalars;
use crate::error::MeanVarianceError;
use crate::error::Result;

pub(crate) fn check_shapes(mean: &Array1<f64>, cov_inv: &Array2<f64>) -> Result<()> {
  let n = mean.len();
  if n == 0 {
    return Err(MeanVarianceError::EmptyUniverse);
  }
  if cov_inv.dim() != (n, n) {
    return Err(MeanVarianceError::DimensionMismatch {
      context: "inverse covariance vs mean",
      expected: n,
      actual: cov_inv.nrows().max(cov_inv.ncols()),
    });
  }
  Ok(())
}

/// `Σ⁻¹ 1`, the row sums of the inverse covariance.
pub(crate) fn inv_ones(cov_inv: &Array2<f64>) -> Array1<f64> {
  cov_inv.dot(&Array1::<f64>::ones(cov_inv.ncols()))
}

/// `A = μᵀ Σ⁻¹ 1`.
pub fn scalar_a(mean: &Array1<f64>, cov_inv: &Array2<f64>) -> f64 {
  mean.dot(&inv_ones(cov_inv))
}

/// `B = μᵀ Σ⁻¹ μ`.
pub fn scalar_b(mean: &Array1<f64>, cov_inv: &Array2<f64>) -> f64 {
  mean.dot(&cov_inv.dot(mean))
}

/// `C = 1ᵀ Σ⁻¹ 1`.
pub fn scalar_c(cov_inv: &Array2<f64>) -> f64 {
  inv_ones(cov_inv).sum()
}

/// `D = B C - A²`.
pub fn scalar_d(a: f64, b: f64, c: f64) -> f64 {
  b * c - a * a
}

/// All four scalars, sharing the `Σ⁻¹ 1` and `Σ⁻¹ μ` products.
pub fn frontier_scalars(mean: &Array1<f64>, cov_inv: &Array2<f64>) -> Result<FrontierScalars> {
  check_shapes(mean, cov_inv)?;

  let inv_one = inv_ones(cov_inv);
  let inv_mu = cov_inv.dot(mean);
  let a = mean.dot(&inv_one);
  let b = mean.dot(&inv_mu);
  let c = inv_one.sum();
  let d = scalar_d(a, b, c);
  debug!(a, b, c, d, "frontier scalars");

  Ok(FrontierScalars { a, b, c, d })
}

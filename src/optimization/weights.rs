//! # Weight Solvers
//!
//! $$
//! \mathbf w_{\text{mvp}}=\frac{\Sigma^{-1}\mathbf 1}{C},\qquad
//! \mathbf w(r)=\mathbf g+\mathbf h\,r
//! $$
//!
//! Closed-form fully-invested weights. Short positions are allowed and every
//! call recomputes from scratch.

use ndarray::Array1;
use ndarray::Array2;

use super::basis::frontier_basis;
use super::inverse::invert_covariance;
use super::moments::covariance_matrix;
use super::moments::sample_moments;
use super::scalars::frontier_scalars;
use super::scalars::inv_ones;
use super::types::MeanVarianceConfig;
use crate::error::MeanVarianceError;
use crate::error::Result;

/// Minimum-variance weights `Σ⁻¹1 / C` with explicit tolerances.
pub fn minimum_variance_weights_with_config(
  cov: &Array2<f64>,
  config: &MeanVarianceConfig,
) -> Result<Array1<f64>> {
  let cov_inv = invert_covariance(cov, config.singular_tolerance)?;
  let inv_one = inv_ones(&cov_inv);
  let c = inv_one.sum();
  Ok(inv_one / c)
}

/// Minimum-variance weights from a covariance matrix.
pub fn minimum_variance_weights(cov: &Array2<f64>) -> Result<Array1<f64>> {
  minimum_variance_weights_with_config(cov, &MeanVarianceConfig::default())
}

pub fn minimum_variance_weights_from_returns_with_config(
  returns: &Array2<f64>,
  config: &MeanVarianceConfig,
) -> Result<Array1<f64>> {
  let cov = covariance_matrix(returns)?;
  minimum_variance_weights_with_config(&cov, config)
}

/// Minimum-variance weights from a `T x N` returns matrix.
pub fn minimum_variance_weights_from_returns(returns: &Array2<f64>) -> Result<Array1<f64>> {
  minimum_variance_weights_from_returns_with_config(returns, &MeanVarianceConfig::default())
}

/// Frontier weights `g + h r` for `target_return` with explicit tolerances.
pub fn optimal_weights_with_config(
  target_return: f64,
  mean: &Array1<f64>,
  cov: &Array2<f64>,
  config: &MeanVarianceConfig,
) -> Result<Array1<f64>> {
  if !target_return.is_finite() {
    return Err(MeanVarianceError::NonFiniteInput("target return"));
  }
  if mean.iter().any(|m| !m.is_finite()) {
    return Err(MeanVarianceError::NonFiniteInput("mean returns"));
  }
  if cov.nrows() != mean.len() {
    return Err(MeanVarianceError::DimensionMismatch {
      context: "covariance rows vs mean",
      expected: mean.len(),
      actual: cov.nrows(),
    });
  }

  let cov_inv = invert_covariance(cov, config.singular_tolerance)?;
  let scalars = frontier_scalars(mean, &cov_inv)?;
  let basis = frontier_basis(mean, &cov_inv, &scalars, config.degenerate_tolerance)?;
  Ok(basis.weights(target_return))
}

/// Frontier weights for `target_return` from mean and covariance.
pub fn optimal_weights(
  target_return: f64,
  mean: &Array1<f64>,
  cov: &Array2<f64>,
) -> Result<Array1<f64>> {
  optimal_weights_with_config(target_return, mean, cov, &MeanVarianceConfig::default())
}

pub fn optimal_weights_from_returns_with_config(
  target_return: f64,
  returns: &Array2<f64>,
  config: &MeanVarianceConfig,
) -> Result<Array1<f64>> {
  let (mean, cov) = sample_moments(returns)?;
  optimal_weights_with_config(target_return, &mean, &cov, config)
}

/// Frontier weights for `target_return` from a `T x N` returns matrix.
pub fn optimal_weights_from_returns(
  target_return: f64,
  returns: &Array2<f64>,
) -> Result<Array1<f64>> {
  optimal_weights_from_returns_with_config(target_return, returns, &MeanVarianceConfig::default())
}

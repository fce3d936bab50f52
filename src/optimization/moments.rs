//! # Sample Moments
//!
//! $$
//! \hat\mu_j=\frac1T\sum_{t=1}^T r_{tj},\qquad
//! \hat\Sigma_{ij}=\frac1{T-1}\sum_{t=1}^T (r_{ti}-\hat\mu_i)(r_{tj}-\hat\mu_j)
//! $$
//!
//! Mean vector and sample covariance of a `T x N` returns matrix (rows are
//! observations, columns are assets).

use ndarray::Array1;
use ndarray::Array2;
use ndarray::Axis;
use ndarray_stats::CorrelationExt;
use tracing::trace;

use crate::error::MeanVarianceError;
use crate::error::Result;

/// Observations needed for a sample covariance.
pub const MIN_OBSERVATIONS: usize = 2;

/// Reject returns matrices the moment estimators cannot handle.
pub(crate) fn validate_returns(returns: &Array2<f64>) -> Result<()> {
  let (t, n) = returns.dim();
  if n == 0 {
    return Err(MeanVarianceError::EmptyUniverse);
  }
  if t < MIN_OBSERVATIONS {
    return Err(MeanVarianceError::InsufficientObservations {
      required: MIN_OBSERVATIONS,
      actual: t,
    });
  }
  if returns.iter().any(|r| !r.is_finite()) {
    return Err(MeanVarianceError::NonFiniteInput("returns"));
  }
  Ok(())
}

fn column_mean(returns: &Array2<f64>) -> Result<Array1<f64>> {
  returns
    .mean_axis(Axis(0))
    .ok_or(MeanVarianceError::InsufficientObservations {
      required: MIN_OBSERVATIONS,
      actual: 0,
    })
}

fn sample_covariance(returns: &Array2<f64>) -> Result<Array2<f64>> {
  // `cov` treats rows as variables, so feed it the transposed view.
  returns
    .t()
    .cov(1.0)
    .map_err(|_| MeanVarianceError::InsufficientObservations {
      required: MIN_OBSERVATIONS,
      actual: returns.nrows(),
    })
}

/// Arithmetic mean of each asset column.
pub fn mean_returns(returns: &Array2<f64>) -> Result<Array1<f64>> {
  validate_returns(returns)?;
  column_mean(returns)
}

/// Sample covariance (`ddof = 1`) of the asset columns.
pub fn covariance_matrix(returns: &Array2<f64>) -> Result<Array2<f64>> {
  validate_returns(returns)?;
  sample_covariance(returns)
}

/// Mean vector and covariance matrix in one validation pass.
pub fn sample_moments(returns: &Array2<f64>) -> Result<(Array1<f64>, Array2<f64>)> {
  validate_returns(returns)?;
  trace!(
    observations = returns.nrows(),
    assets = returns.ncols(),
    "extracting sample moments"
  );
  Ok((column_mean(returns)?, sample_covariance(returns)?))
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use ndarray::array;

  use super::*;

  #[test]
  fn mean_and_covariance_match_hand_computation() {
    let returns = array![[0.01, 0.02], [0.03, 0.00], [0.05, 0.04]];
    let (mu, cov) = sample_moments(&returns).unwrap();

    assert_abs_diff_eq!(mu[0], 0.03, epsilon = 1e-15);
    assert_abs_diff_eq!(mu[1], 0.02, epsilon = 1e-15);

    // deviations: a = [-0.02, 0, 0.02], b = [0, -0.02, 0.02]
    assert_abs_diff_eq!(cov[[0, 0]], 0.0004, epsilon = 1e-15);
    assert_abs_diff_eq!(cov[[1, 1]], 0.0004, epsilon = 1e-15);
    assert_abs_diff_eq!(cov[[0, 1]], 0.0002, epsilon = 1e-15);
    assert_abs_diff_eq!(cov[[1, 0]], cov[[0, 1]], epsilon = 0.0);
  }

  #[test]
  fn single_observation_is_rejected() {
    let returns = array![[0.01, 0.02, 0.03]];
    assert_eq!(
      covariance_matrix(&returns),
      Err(MeanVarianceError::InsufficientObservations {
        required: 2,
        actual: 1
      })
    );
    assert!(mean_returns(&returns).is_err());
  }

  #[test]
  fn empty_universe_and_nan_are_rejected() {
    let empty = Array2::<f64>::zeros((5, 0));
    assert_eq!(
      sample_moments(&empty),
      Err(MeanVarianceError::EmptyUniverse)
    );

    let returns = array![[0.01, f64::NAN], [0.02, 0.01]];
    assert_eq!(
      sample_moments(&returns),
      Err(MeanVarianceError::NonFiniteInput("returns"))
    );
  }
}

//! # Errors
//!
//! $$
//! \det \Sigma = 0 \;\lor\; D = BC - A^2 = 0 \implies \text{no frontier}
//! $$
//!
//! Error taxonomy shared by the optimization core and the portfolio view.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MeanVarianceError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeanVarianceError {
  /// Covariance is not positive definite, or its smallest Cholesky pivot is
  /// too small relative to the largest one.
  #[error("covariance matrix is singular (pivot ratio {pivot_ratio:e} <= tolerance {tolerance:e})")]
  SingularMatrix { pivot_ratio: f64, tolerance: f64 },

  /// Expected returns cannot be separated along the frontier (D ~ 0).
  #[error("efficient frontier is degenerate (D = {d:e})")]
  DegenerateFrontier { d: f64 },

  #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
  DimensionMismatch {
    context: &'static str,
    expected: usize,
    actual: usize,
  },

  /// Weight keys and asset labels disagree.
  #[error("asset mismatch: missing {missing:?}, unexpected {unexpected:?}")]
  AssetMismatch {
    missing: Vec<String>,
    unexpected: Vec<String>,
  },

  #[error("duplicate asset label '{0}'")]
  DuplicateAsset(String),

  #[error("need at least {required} observations, got {actual}")]
  InsufficientObservations { required: usize, actual: usize },

  #[error("no assets supplied")]
  EmptyUniverse,

  #[error("non-finite value in {0}")]
  NonFiniteInput(&'static str),

  /// Sharpe ratio requested for a riskless weight vector.
  #[error("portfolio volatility is zero")]
  ZeroVolatility,

  #[error("invalid frontier range [{min}, {max}] with {points} points")]
  InvalidFrontierRange { min: f64, max: f64, points: usize },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_carry_context() {
    let err = MeanVarianceError::DimensionMismatch {
      context: "weights",
      expected: 3,
      actual: 2,
    };
    assert_eq!(
      err.to_string(),
      "dimension mismatch in weights: expected 3, got 2"
    );

    let err = MeanVarianceError::InsufficientObservations {
      required: 2,
      actual: 1,
    };
    assert!(err.to_string().contains("at least 2"));
  }
}

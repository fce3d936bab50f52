//! # Covariance Inverse
//!
//! $$
//! R = S\Sigma S = LL^\top,\qquad \Sigma^{-1} = S\,L^{-\top}L^{-1}S
//! $$
//!
//! Cholesky-based inversion of a covariance matrix with an explicit
//! singularity check on the pivots of its correlation factor.

use nalgebra::DMatrix;
use ndarray::Array2;
use tracing::debug;
use tracing::warn;

use crate::error::MeanVarianceError;
use crate::error::Result;

/// Pivot ratios within this factor of the tolerance are accepted but logged.
const NEAR_SINGULAR_FACTOR: f64 = 1e4;

/// Invert a symmetric positive-definite covariance matrix.
///
/// Only the lower triangle is read. The pivot check runs on the correlation
/// matrix `R = S Σ S` with `S = diag(Σ_ii^{-1/2})`, so assets on very
/// different variance scales do not trip it. With `p_i = L_ii^2` the pivots
/// of the Cholesky factor of `R`, the matrix is reported as
/// [`MeanVarianceError::SingularMatrix`] when an asset has no variance, when
/// the factorization fails or when `min p_i / max p_i <= tolerance`.
/// Collinear assets and fewer than `N + 1` observations both land there.
pub fn invert_covariance(cov: &Array2<f64>, tolerance: f64) -> Result<Array2<f64>> {
  let (rows, cols) = cov.dim();
  if rows == 0 {
    return Err(MeanVarianceError::EmptyUniverse);
  }
  if rows != cols {
    return Err(MeanVarianceError::DimensionMismatch {
      context: "covariance columns",
      expected: rows,
      actual: cols,
    });
  }
  if cov.iter().any(|v| !v.is_finite()) {
    return Err(MeanVarianceError::NonFiniteInput("covariance"));
  }

  let diag = cov.diag();
  if diag.iter().any(|&v| v <= 0.0) {
    debug!(assets = rows, "asset with zero variance");
    return Err(MeanVarianceError::SingularMatrix {
      pivot_ratio: 0.0,
      tolerance,
    });
  }
  let scale = diag.mapv(|v| 1.0 / v.sqrt());
  let corr = DMatrix::from_fn(rows, rows, |i, j| cov[[i, j]] * scale[i] * scale[j]);

  let Some(chol) = corr.cholesky() else {
    debug!(assets = rows, "cholesky factorization failed");
    return Err(MeanVarianceError::SingularMatrix {
      pivot_ratio: 0.0,
      tolerance,
    });
  };

  let (min_pivot, max_pivot) = chol
    .l_dirty()
    .diagonal()
    .iter()
    .map(|l| l * l)
    .fold((f64::INFINITY, 0.0_f64), |(lo, hi), p| (lo.min(p), hi.max(p)));
  let pivot_ratio = min_pivot / max_pivot;
  debug!(pivot_ratio, tolerance, "correlation cholesky pivots");

  if !(pivot_ratio > tolerance) {
    return Err(MeanVarianceError::SingularMatrix {
      pivot_ratio,
      tolerance,
    });
  }
  if pivot_ratio <= tolerance * NEAR_SINGULAR_FACTOR {
    warn!(pivot_ratio, tolerance, "covariance matrix is close to singular");
  }

  // Σ⁻¹ = S R⁻¹ S
  let corr_inv = chol.inverse();
  Ok(Array2::from_shape_fn((rows, rows), |(i, j)| {
    0.5 * (corr_inv[(i, j)] + corr_inv[(j, i)]) * scale[i] * scale[j]
  }))
}

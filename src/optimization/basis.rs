//! # Frontier Basis
//!
//! $$
//! \mathbf g=\frac{B\,\Sigma^{-1}\mathbf 1-A\,\Sigma^{-1}\mu}{D},\qquad
//! \mathbf h=\frac{C\,\Sigma^{-1}\mu-A\,\Sigma^{-1}\mathbf 1}{D}
//! $$
//!
//! Every frontier portfolio is `g + h r`. The weights of `g` sum to one and
//! those of `h` sum to zero, so the budget constraint holds for every `r`.

use ndarray::Array1;
use ndarray::Array2;

use super::scalars::check_shapes;
use super::scalars::inv_ones;
use super::types::FrontierBasis;
use super::types::FrontierScalars;
use crate::error::MeanVarianceError;
use crate::error::Result;

fn degenerate_guard(scalars: &FrontierScalars, tolerance: f64) -> Result<()> {
  if scalars.is_degenerate(tolerance) {
    return Err(MeanVarianceError::DegenerateFrontier { d: scalars.d });
  }
  Ok(())
}

/// The `g` vector: frontier weights at zero target return.
pub fn basis_g(
  mean: &Array1<f64>,
  cov_inv: &Array2<f64>,
  scalars: &FrontierScalars,
  tolerance: f64,
) -> Result<Array1<f64>> {
  check_shapes(mean, cov_inv)?;
  degenerate_guard(scalars, tolerance)?;
  let FrontierScalars { a, b, d, .. } = *scalars;
  Ok((inv_ones(cov_inv) * b - cov_inv.dot(mean) * a) / d)
}

/// The `h` vector: change in frontier weights per unit of target return.
pub fn basis_h(
  mean: &Array1<f64>,
  cov_inv: &Array2<f64>,
  scalars: &FrontierScalars,
  tolerance: f64,
) -> Result<Array1<f64>> {
  check_shapes(mean, cov_inv)?;
  degenerate_guard(scalars, tolerance)?;
  let FrontierScalars { a, c, d, .. } = *scalars;
  Ok((cov_inv.dot(mean) * c - inv_ones(cov_inv) * a) / d)
}

/// Both basis vectors, failing with [`MeanVarianceError::DegenerateFrontier`]
/// instead of dividing by a vanishing `D`.
pub fn frontier_basis(
  mean: &Array1<f64>,
  cov_inv: &Array2<f64>,
  scalars: &FrontierScalars,
  tolerance: f64,
) -> Result<FrontierBasis> {
  check_shapes(mean, cov_inv)?;
  degenerate_guard(scalars, tolerance)?;

  let FrontierScalars { a, b, c, d } = *scalars;
  let inv_one = inv_ones(cov_inv);
  let inv_mu = cov_inv.dot(mean);

  Ok(FrontierBasis {
    g: (&inv_one * b - &inv_mu * a) / d,
    h: (&inv_mu * c - &inv_one * a) / d,
  })
}

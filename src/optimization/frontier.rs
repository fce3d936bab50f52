//! # Efficient Frontier
//!
//! $$
//! \sigma^2(r)=\frac{C r^2-2Ar+B}{D}
//! $$
//!
//! A prepared frontier: inverts the covariance once and answers any number
//! of target-return queries.

use ndarray::parallel::prelude::*;
use ndarray::Array1;
use ndarray::Array2;
use ndarray::Zip;

use super::basis::frontier_basis;
use super::inverse::invert_covariance;
use super::moments::sample_moments;
use super::scalars::frontier_scalars;
use super::scalars::inv_ones;
use super::types::FrontierBasis;
use super::types::FrontierPoint;
use super::types::FrontierScalars;
use super::types::MeanVarianceConfig;
use crate::error::MeanVarianceError;
use crate::error::Result;

/// Inverse covariance, frontier scalars and basis for one set of moments.
#[derive(Clone, Debug)]
pub struct Frontier {
  mean: Array1<f64>,
  cov_inv: Array2<f64>,
  scalars: FrontierScalars,
  basis: FrontierBasis,
  config: MeanVarianceConfig,
}

impl Frontier {
  /// Prepare the frontier from mean returns and a covariance matrix.
  pub fn from_moments(
    mean: &Array1<f64>,
    cov: &Array2<f64>,
    config: &MeanVarianceConfig,
  ) -> Result<Self> {
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

    Ok(Self {
      mean: mean.clone(),
      cov_inv,
      scalars,
      basis,
      config: *config,
    })
  }

  /// Prepare the frontier from a `T x N` return matrix.
  pub fn from_returns(returns: &Array2<f64>, config: &MeanVarianceConfig) -> Result<Self> {
    let (mean, cov) = sample_moments(returns)?;
    Self::from_moments(&mean, &cov, config)
  }

  /// Borrow `A`, `B`, `C`, `D`.
  pub fn scalars(&self) -> &FrontierScalars {
    &self.scalars
  }

  /// Borrow the `g`, `h` basis.
  pub fn basis(&self) -> &FrontierBasis {
    &self.basis
  }

  /// Borrow `Σ⁻¹`.
  pub fn inverse_covariance(&self) -> &Array2<f64> {
    &self.cov_inv
  }

  /// Expected return of the minimum-variance portfolio, `A / C`.
  pub fn mvp_return(&self) -> f64 {
    self.scalars.mvp_return()
  }

  /// Variance of the minimum-variance portfolio, `1 / C`.
  pub fn mvp_variance(&self) -> f64 {
    self.scalars.mvp_variance()
  }

  /// Minimum-variance weights `Σ⁻¹ 1 / C`.
  pub fn minimum_variance_weights(&self) -> Array1<f64> {
    inv_ones(&self.cov_inv) / self.scalars.c
  }

  /// Frontier weights `g + h r`.
  pub fn weights(&self, target_return: f64) -> Result<Array1<f64>> {
    if !target_return.is_finite() {
      return Err(MeanVarianceError::NonFiniteInput("target return"));
    }
    Ok(self.basis.weights(target_return))
  }

  /// Variance of the frontier portfolio earning `target_return`.
  pub fn variance_at(&self, target_return: f64) -> f64 {
    let FrontierScalars { a, b, c, d } = self.scalars;
    (c * target_return * target_return - 2.0 * a * target_return + b) / d
  }

  /// Standard deviation of the frontier portfolio earning `target_return`.
  pub fn volatility_at(&self, target_return: f64) -> f64 {
    self.variance_at(target_return).max(0.0).sqrt()
  }

  /// `points` evenly spaced frontier portfolios over `[min_return, max_return]`.
  pub fn sample(
    &self,
    min_return: f64,
    max_return: f64,
    points: usize,
  ) -> Result<Vec<FrontierPoint>> {
    if points < 2
      || !min_return.is_finite()
      || !max_return.is_finite()
      || min_return >= max_return
    {
      return Err(MeanVarianceError::InvalidFrontierRange {
        min: min_return,
        max: max_return,
        points,
      });
    }

    let targets = Array1::linspace(min_return, max_return, points);
    let sampled = Zip::from(&targets).par_map_collect(|&target_return| {
      let variance = self.variance_at(target_return);
      FrontierPoint {
        target_return,
        variance,
        volatility: variance.max(0.0).sqrt(),
        weights: self.basis.weights(target_return),
      }
    });

    Ok(sampled.into_iter().collect())
  }

  /// Maximum-Sharpe frontier portfolio at the configured risk-free rate.
  pub fn tangency_weights(&self) -> Result<Array1<f64>> {
    self.tangency_weights_at(self.config.risk_free)
  }

  /// Maximum-Sharpe frontier portfolio `Σ⁻¹(μ - r_f 1) / (A - C r_f)`.
  pub fn tangency_weights_at(&self, risk_free: f64) -> Result<Array1<f64>> {
    if !risk_free.is_finite() {
      return Err(MeanVarianceError::NonFiniteInput("risk-free rate"));
    }
    let FrontierScalars { a, c, .. } = self.scalars;
    let denom = a - c * risk_free;
    let scale = a.abs() + (c * risk_free).abs();
    // vanishes when the risk-free rate equals the MVP return
    if !denom.is_finite() || denom.abs() <= self.config.degenerate_tolerance * scale {
      return Err(MeanVarianceError::DegenerateFrontier { d: denom });
    }
    let excess = &self.mean - risk_free;
    Ok(self.cov_inv.dot(&excess) / denom)
  }
}

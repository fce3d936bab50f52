//! # Optimization Types
//!
//! $$
//! \mathbf w(r)=\mathbf g+\mathbf h\,r,\qquad
//! \sigma^2(r)=\frac{C r^2-2Ar+B}{D}
//! $$
//!
//! Shared configuration and result containers for the closed-form solvers.

use impl_new_derive::ImplNew;
use ndarray::Array1;

/// Numerical thresholds used by the closed-form solvers.
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct MeanVarianceConfig {
  /// Smallest accepted ratio `min(L_ii^2) / max(L_ii^2)` of the covariance
  /// Cholesky factor. Anything at or below is reported as singular.
  pub singular_tolerance: f64,
  /// Smallest accepted ratio `D / (B C)`. Lies in `[0, 1]` by Cauchy-Schwarz.
  pub degenerate_tolerance: f64,
  /// Risk-free rate used for Sharpe ratios and the tangency portfolio.
  pub risk_free: f64,
}

impl Default for MeanVarianceConfig {
  fn default() -> Self {
    Self {
      singular_tolerance: 1e-12,
      degenerate_tolerance: 1e-12,
      risk_free: 0.0,
    }
  }
}

/// The four scalars parameterizing the efficient frontier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierScalars {
  pub a: f64,
  pub b: f64,
  pub c: f64,
  pub d: f64,
}

impl FrontierScalars {
  /// Expected return of the minimum-variance portfolio, `A / C`.
  pub fn mvp_return(&self) -> f64 {
    self.a / self.c
  }

  /// Variance of the minimum-variance portfolio, `1 / C`.
  pub fn mvp_variance(&self) -> f64 {
    1.0 / self.c
  }

  /// `true` when `D <= tolerance * B * C` or `D` is not finite.
  pub fn is_degenerate(&self, tolerance: f64) -> bool {
    !self.d.is_finite() || self.d <= tolerance * (self.b * self.c).abs()
  }
}

/// Affine basis of frontier weights: `w(r) = g + h r`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierBasis {
  pub g: Array1<f64>,
  pub h: Array1<f64>,
}

impl FrontierBasis {
  /// Frontier weights for `target_return`.
  pub fn weights(&self, target_return: f64) -> Array1<f64> {
    &self.g + &(&self.h * target_return)
  }
}

/// One sampled point of the efficient frontier.
#[derive(Clone, Debug)]
pub struct FrontierPoint {
  pub target_return: f64,
  pub variance: f64,
  pub volatility: f64,
  pub weights: Array1<f64>,
}

//! # Mean-Variance Engine
//!
//! $$
//! \mathbf{w}^\* = \operatorname{Allocate}(R;\ \text{method},\ \text{config})
//! $$
//!
//! Configured entry point over the closed-form solvers and the portfolio view.

use ndarray::Array1;
use ndarray::Array2;

use crate::error::Result;
use crate::optimization::frontier::Frontier;
use crate::optimization::types::MeanVarianceConfig;
use crate::optimization::weights::minimum_variance_weights_from_returns_with_config;
use crate::optimization::weights::optimal_weights_from_returns_with_config;
use crate::portfolio::Portfolio;
use crate::portfolio::ReturnTable;

/// Weight-initialization policy for [`MeanVarianceEngine::allocate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AllocationMethod {
  /// `1 / N` on every asset.
  EqualWeight,
  /// Global minimum-variance portfolio.
  MinimumVariance,
  /// Frontier portfolio earning the given expected return.
  TargetReturn(f64),
  /// Maximum-Sharpe frontier portfolio for the configured risk-free rate.
  Tangency,
}

impl AllocationMethod {
  /// Parse a method name. `target` is only used by the target-return method.
  pub fn from_str(s: &str, target: f64) -> Self {
    match s.to_lowercase().as_str() {
      "eqw" | "equal" | "equal-weight" => Self::EqualWeight,
      "target" | "optimal" | "target-return" => Self::TargetReturn(target),
      "tangency" | "max-sharpe" => Self::Tangency,
      _ => Self::MinimumVariance,
    }
  }
}

/// Single entry point carrying solver tolerances and the risk-free rate.
#[derive(Clone, Debug, Default)]
pub struct MeanVarianceEngine {
  config: MeanVarianceConfig,
}

impl MeanVarianceEngine {
  /// Construct a new engine with explicit configuration.
  pub fn new(config: MeanVarianceConfig) -> Self {
    Self { config }
  }

  /// Borrow engine configuration.
  pub fn config(&self) -> &MeanVarianceConfig {
    &self.config
  }

  /// Minimum-variance weights from a `T x N` return matrix.
  pub fn minimum_variance(&self, returns: &Array2<f64>) -> Result<Array1<f64>> {
    minimum_variance_weights_from_returns_with_config(returns, &self.config)
  }

  /// Frontier weights earning `target_return` from a `T x N` return matrix.
  pub fn optimal(&self, returns: &Array2<f64>, target_return: f64) -> Result<Array1<f64>> {
    optimal_weights_from_returns_with_config(target_return, returns, &self.config)
  }

  /// Minimum-variance [`Portfolio`] over `table`.
  pub fn portfolio_minimum_variance(&self, table: ReturnTable) -> Result<Portfolio> {
    Portfolio::minimum_variance_with_config(table, &self.config)
  }

  /// Frontier [`Portfolio`] over `table` earning `target_return`.
  pub fn portfolio_optimal(&self, table: ReturnTable, target_return: f64) -> Result<Portfolio> {
    Portfolio::optimal_with_config(table, target_return, &self.config)
  }

  /// Prepared frontier for repeated target-return queries.
  pub fn frontier(&self, returns: &Array2<f64>) -> Result<Frontier> {
    Frontier::from_returns(returns, &self.config)
  }

  /// Build a [`Portfolio`] over `table` using `method`.
  pub fn allocate(&self, table: ReturnTable, method: AllocationMethod) -> Result<Portfolio> {
    match method {
      AllocationMethod::EqualWeight => Portfolio::equal_weight(table),
      AllocationMethod::MinimumVariance => self.portfolio_minimum_variance(table),
      AllocationMethod::TargetReturn(r) => self.portfolio_optimal(table, r),
      AllocationMethod::Tangency => {
        let weights = self.frontier(table.returns())?.tangency_weights()?;
        Portfolio::new(table, weights)
      }
    }
  }

  /// Sharpe ratio at the configured risk-free rate.
  pub fn sharpe_ratio(&self, portfolio: &Portfolio) -> Result<f64> {
    portfolio.sharpe_ratio(self.config.risk_free)
  }
}

//! # Portfolio View
//!
//! $$
//! \mathbb E[R_p]=\mu^\top\mathbf w,\qquad \sigma_p^2=\mathbf w^\top\Sigma\mathbf w,\qquad
//! S=\frac{\mathbb E[R_p]-r_f}{\sigma_p}
//! $$
//!
//! Immutable returns + weights pair with read-only derived statistics.

use std::collections::HashMap;

use ndarray::Array1;
use ndarray::Array2;
use ndarray::Axis;

use super::returns::ReturnTable;
use crate::error::MeanVarianceError;
use crate::error::Result;
use crate::optimization::moments::sample_moments;
use crate::optimization::types::MeanVarianceConfig;
use crate::optimization::weights::minimum_variance_weights_with_config;
use crate::optimization::weights::optimal_weights_with_config;

/// Returns and weights over a labelled asset universe. Mean and covariance
/// are derived once at construction.
#[derive(Clone, Debug)]
pub struct Portfolio {
  table: ReturnTable,
  weights: Array1<f64>,
  mean: Array1<f64>,
  cov: Array2<f64>,
}

impl Portfolio {
  /// Weights are positional and must line up with the table's asset columns.
  pub fn new(table: ReturnTable, weights: Array1<f64>) -> Result<Self> {
    let (mean, cov) = sample_moments(table.returns())?;
    Self::from_parts(table, weights, mean, cov)
  }

  fn from_parts(
    table: ReturnTable,
    weights: Array1<f64>,
    mean: Array1<f64>,
    cov: Array2<f64>,
  ) -> Result<Self> {
    if weights.len() != table.n_assets() {
      return Err(MeanVarianceError::DimensionMismatch {
        context: "weights vs assets",
        expected: table.n_assets(),
        actual: weights.len(),
      });
    }
    if weights.iter().any(|w| !w.is_finite()) {
      return Err(MeanVarianceError::NonFiniteInput("weights"));
    }

    Ok(Self {
      table,
      weights,
      mean,
      cov,
    })
  }

  /// Weights keyed by asset label; the key set must equal the table's labels.
  pub fn from_weight_map(table: ReturnTable, weights: &HashMap<String, f64>) -> Result<Self> {
    let missing: Vec<String> = table
      .assets()
      .iter()
      .filter(|a| !weights.contains_key(a.as_str()))
      .cloned()
      .collect();
    let mut unexpected: Vec<String> = weights
      .keys()
      .filter(|k| table.position(k).is_none())
      .cloned()
      .collect();
    unexpected.sort();

    if !missing.is_empty() || !unexpected.is_empty() {
      return Err(MeanVarianceError::AssetMismatch {
        missing,
        unexpected,
      });
    }

    let ordered = table.assets().iter().map(|a| weights[a]).collect();
    Self::new(table, ordered)
  }

  /// `1 / N` on every asset.
  pub fn equal_weight(table: ReturnTable) -> Result<Self> {
    let n = table.n_assets();
    Self::new(table, Array1::from_elem(n, 1.0 / n as f64))
  }

  pub fn minimum_variance(table: ReturnTable) -> Result<Self> {
    Self::minimum_variance_with_config(table, &MeanVarianceConfig::default())
  }

  pub fn minimum_variance_with_config(
    table: ReturnTable,
    config: &MeanVarianceConfig,
  ) -> Result<Self> {
    let (mean, cov) = sample_moments(table.returns())?;
    let weights = minimum_variance_weights_with_config(&cov, config)?;
    Self::from_parts(table, weights, mean, cov)
  }

  /// Frontier portfolio whose expected return is `target_return`.
  pub fn optimal(table: ReturnTable, target_return: f64) -> Result<Self> {
    Self::optimal_with_config(table, target_return, &MeanVarianceConfig::default())
  }

  pub fn optimal_with_config(
    table: ReturnTable,
    target_return: f64,
    config: &MeanVarianceConfig,
  ) -> Result<Self> {
    let (mean, cov) = sample_moments(table.returns())?;
    let weights = optimal_weights_with_config(target_return, &mean, &cov, config)?;
    Self::from_parts(table, weights, mean, cov)
  }

  pub fn table(&self) -> &ReturnTable {
    &self.table
  }

  pub fn assets(&self) -> &[String] {
    self.table.assets()
  }

  pub fn weights(&self) -> &Array1<f64> {
    &self.weights
  }

  pub fn weight_of(&self, asset: &str) -> Option<f64> {
    self.table.position(asset).map(|i| self.weights[i])
  }

  pub fn weights_by_asset(&self) -> Vec<(&str, f64)> {
    self
      .assets()
      .iter()
      .map(String::as_str)
      .zip(self.weights.iter().copied())
      .collect()
  }

  pub fn mean_returns(&self) -> &Array1<f64> {
    &self.mean
  }

  pub fn covariance_matrix(&self) -> &Array2<f64> {
    &self.cov
  }

  pub fn expected_return(&self) -> f64 {
    self.mean.dot(&self.weights)
  }

  pub fn variance(&self) -> f64 {
    self.weights.dot(&self.cov.dot(&self.weights))
  }

  pub fn volatility(&self) -> f64 {
    self.variance().max(0.0).sqrt()
  }

  /// `(E[R_p] - r_f) / σ_p`; a riskless weight vector is an error.
  pub fn sharpe_ratio(&self, risk_free: f64) -> Result<f64> {
    let vol = self.volatility();
    if vol <= f64::EPSILON {
      return Err(MeanVarianceError::ZeroVolatility);
    }
    Ok((self.expected_return() - risk_free) / vol)
  }

  /// Per-period portfolio returns `R w`.
  pub fn period_returns(&self) -> Array1<f64> {
    self.table.returns().dot(&self.weights)
  }

  /// Compounded per-asset returns `∏(1 + r) - 1` along the time axis.
  pub fn cumulative_asset_returns(&self) -> Array2<f64> {
    let mut growth = self.table.returns().mapv(|r| 1.0 + r);
    growth.accumulate_axis_inplace(Axis(0), |&prev, curr| *curr *= prev);
    growth - 1.0
  }

  /// Weighted combination of the compounded asset returns.
  pub fn cumulative_portfolio_returns(&self) -> Array1<f64> {
    (self.cumulative_asset_returns() + 1.0).dot(&self.weights) - 1.0
  }
}

/// Equal-weight construction over every asset in `table`.
pub fn portfolio_with_equal_weights(table: ReturnTable) -> Result<Portfolio> {
  Portfolio::equal_weight(table)
}

pub fn mvp_portfolio(table: ReturnTable) -> Result<Portfolio> {
  Portfolio::minimum_variance(table)
}

pub fn optimal_portfolio(table: ReturnTable, target_return: f64) -> Result<Portfolio> {
  Portfolio::optimal(table, target_return)
}

#[cfg(test)]
mod tests {
  use anyhow::Result;
  use approx::assert_abs_diff_eq;
  use ndarray::array;

  use super::*;

  fn fixture() -> ReturnTable {
    ReturnTable::from_columns(vec![
      (
        "Asset1",
        vec![
          0.01, 0.02, 0.015, 0.03, -0.025, 0.035, 0.04, 0.045, 0.25, 0.055, 0.06, 0.065,
        ],
      ),
      (
        "Asset2",
        vec![
          0.02, 0.025, 0.03, 0.035, 0.04, -0.025, 0.05, 0.055, 0.06, 0.065, 0.07, 0.075,
        ],
      ),
      (
        "Asset3",
        vec![
          0.015, 0.02, 0.025, 0.03, 0.035, -0.04, 0.045, 0.05, 0.055, 0.06, 0.065, 0.07,
        ],
      ),
    ])
    .expect("fixture is valid")
  }

  #[test]
  fn equal_weight_is_exactly_one_over_n() -> Result<()> {
    let portfolio = portfolio_with_equal_weights(fixture())?;
    assert_eq!(portfolio.weights(), &array![1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
    assert_eq!(portfolio.weight_of("Asset2"), Some(1.0 / 3.0));
    Ok(())
  }

  #[test]
  fn optimal_portfolio_hits_target() -> Result<()> {
    let portfolio = optimal_portfolio(fixture(), 0.025)?;
    assert_abs_diff_eq!(portfolio.expected_return(), 0.025, epsilon = 1e-4);
    assert_abs_diff_eq!(portfolio.weights().sum(), 1.0, epsilon = 1e-9);
    Ok(())
  }

  #[test]
  fn mvp_has_lower_variance_than_alternatives() -> Result<()> {
    let mvp = mvp_portfolio(fixture())?;
    let eqw = portfolio_with_equal_weights(fixture())?;
    let opt = optimal_portfolio(fixture(), 0.025)?;

    assert!(mvp.variance() <= eqw.variance() + 1e-15);
    assert!(mvp.variance() <= opt.variance() + 1e-15);
    assert_abs_diff_eq!(mvp.volatility(), mvp.variance().sqrt(), epsilon = 1e-15);
    Ok(())
  }

  #[test]
  fn sharpe_ratio_uses_risk_free_rate() -> Result<()> {
    let portfolio = portfolio_with_equal_weights(fixture())?;
    let s0 = portfolio.sharpe_ratio(0.0)?;
    let s1 = portfolio.sharpe_ratio(0.01)?;

    assert_abs_diff_eq!(
      s0,
      portfolio.expected_return() / portfolio.volatility(),
      epsilon = 1e-12
    );
    assert_abs_diff_eq!(s0 - s1, 0.01 / portfolio.volatility(), epsilon = 1e-12);
    Ok(())
  }

  #[test]
  fn riskless_weights_have_no_sharpe_ratio() -> Result<()> {
    let table = ReturnTable::new(["A", "B"], array![[0.01, 0.02], [0.03, 0.05]])?;
    let portfolio = Portfolio::new(table, array![0.0, 0.0])?;

    assert_eq!(portfolio.variance(), 0.0);
    assert_eq!(
      portfolio.sharpe_ratio(0.0),
      Err(MeanVarianceError::ZeroVolatility)
    );
    Ok(())
  }

  #[test]
  fn cumulative_returns_compound() -> Result<()> {
    let table = ReturnTable::new(["A", "B"], array![[0.10, 0.0], [0.10, -0.5], [-0.5, 1.0]])?;
    let portfolio = Portfolio::new(table, array![0.25, 0.75])?;
    let cum = portfolio.cumulative_asset_returns();

    assert_abs_diff_eq!(cum[[0, 0]], 0.10, epsilon = 1e-12);
    assert_abs_diff_eq!(cum[[1, 0]], 0.21, epsilon = 1e-12);
    assert_abs_diff_eq!(cum[[2, 0]], -0.395, epsilon = 1e-12);
    assert_abs_diff_eq!(cum[[1, 1]], -0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(cum[[2, 1]], 0.0, epsilon = 1e-12);

    let port = portfolio.cumulative_portfolio_returns();
    assert_eq!(port.len(), 3);
    assert_abs_diff_eq!(port[2], 0.25 * -0.395 + 0.75 * 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(port[1], 0.25 * 0.21 + 0.75 * -0.5, epsilon = 1e-12);

    let period = portfolio.period_returns();
    assert_abs_diff_eq!(period[0], 0.025, epsilon = 1e-12);
    Ok(())
  }

  #[test]
  fn solved_portfolios_carry_sample_moments() -> Result<()> {
    let (mean, cov) = sample_moments(fixture().returns())?;
    let mvp = mvp_portfolio(fixture())?;
    let opt = optimal_portfolio(fixture(), 0.025)?;

    for p in [&mvp, &opt] {
      assert_eq!(p.mean_returns(), &mean);
      assert_eq!(p.covariance_matrix(), &cov);
    }
    assert_abs_diff_eq!(opt.expected_return(), opt.weights().dot(&mean), epsilon = 0.0);
    Ok(())
  }

  #[test]
  fn weight_vector_length_is_checked_first() {
    assert!(matches!(
      Portfolio::new(fixture(), array![0.5, 0.5]),
      Err(MeanVarianceError::DimensionMismatch { .. })
    ));
  }

  #[test]
  fn weight_map_keys_must_match_assets() -> Result<()> {
    let mut weights = HashMap::new();
    weights.insert("Asset3".to_string(), 0.5);
    weights.insert("Asset1".to_string(), 0.2);
    weights.insert("Asset2".to_string(), 0.3);

    let portfolio = Portfolio::from_weight_map(fixture(), &weights)?;
    assert_eq!(
      portfolio.weights_by_asset(),
      vec![("Asset1", 0.2), ("Asset2", 0.3), ("Asset3", 0.5)]
    );

    weights.remove("Asset2");
    weights.insert("Asset9".to_string(), 0.3);
    assert_eq!(
      Portfolio::from_weight_map(fixture(), &weights).unwrap_err(),
      MeanVarianceError::AssetMismatch {
        missing: vec!["Asset2".to_string()],
        unexpected: vec!["Asset9".to_string()],
      }
    );
    Ok(())
  }
}

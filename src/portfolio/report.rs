//! # Portfolio Report
//!
//! $$
//! \bigl(a_i,\ w_i,\ \mu_i\bigr)_{i=1}^{N},\qquad
//! \mu^\top\mathbf w,\quad \mathbf w^\top\Sigma\mathbf w,\quad \sigma_p
//! $$
//!
//! Plain-text table rendering of a [`Portfolio`].

use std::fmt;

use prettytable::row;
use prettytable::Table;

use super::view::Portfolio;

impl Portfolio {
  /// Weights and per-asset mean returns followed by portfolio statistics.
  pub fn report(&self) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Asset", "Weight", "Mean return"]);

    for ((asset, w), mu) in self.weights_by_asset().into_iter().zip(self.mean_returns()) {
      table.add_row(row![asset, format!("{w:.6}"), format!("{mu:.6}")]);
    }

    table.add_row(row!["Expected return", "", format!("{:.6}", self.expected_return())]);
    table.add_row(row!["Variance", "", format!("{:.6}", self.variance())]);
    table.add_row(row!["Volatility", "", format!("{:.6}", self.volatility())]);
    table
  }
}

impl fmt::Display for Portfolio {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.report())
  }
}

//! # mean-variance-rs
//!
//! $$
//! \mathbf w(r)=\mathbf g+\mathbf h\,r,\qquad
//! \mathbf w_{\text{mvp}}=\frac{\Sigma^{-1}\mathbf 1}{\mathbf 1^\top\Sigma^{-1}\mathbf 1}
//! $$
//!
//! Closed-form Markowitz mean-variance portfolios from historical returns:
//! the minimum-variance portfolio, target-return frontier portfolios and an
//! immutable portfolio view with the usual derived statistics.

pub mod engine;
pub mod error;
pub mod optimization;
pub mod portfolio;

pub use engine::AllocationMethod;
pub use engine::MeanVarianceEngine;
pub use error::MeanVarianceError;
pub use error::Result;
pub use optimization::minimum_variance_weights;
pub use optimization::minimum_variance_weights_from_returns;
pub use optimization::optimal_weights;
pub use optimization::optimal_weights_from_returns;
pub use optimization::Frontier;
pub use optimization::MeanVarianceConfig;
pub use portfolio::mvp_portfolio;
pub use portfolio::optimal_portfolio;
pub use portfolio::portfolio_with_equal_weights;
pub use portfolio::Portfolio;
pub use portfolio::ReturnTable;

//! # Optimization
//!
//! $$
//! \min_{\mathbf w}\ \mathbf w^\top\Sigma\mathbf w
//! \quad\text{s.t.}\quad \mathbf w^\top\mu=r,\ \mathbf w^\top\mathbf 1=1
//! $$
//!
//! Closed-form Markowitz solutions: returns -> moments -> inverse covariance
//! -> frontier scalars -> basis vectors -> weights.

pub mod basis;
pub mod frontier;
pub mod inverse;
pub mod moments;
pub mod scalars;
pub mod types;
pub mod weights;

pub use basis::frontier_basis;
pub use frontier::Frontier;
pub use inverse::invert_covariance;
pub use moments::covariance_matrix;
pub use moments::mean_returns;
pub use moments::sample_moments;
pub use scalars::frontier_scalars;
pub use types::FrontierBasis;
pub use types::FrontierPoint;
pub use types::FrontierScalars;
pub use types::MeanVarianceConfig;
pub use weights::minimum_variance_weights;
pub use weights::minimum_variance_weights_from_returns;
pub use weights::minimum_variance_weights_from_returns_with_config;
pub use weights::minimum_variance_weights_with_config;
pub use weights::optimal_weights;
pub use weights::optimal_weights_from_returns;
pub use weights::optimal_weights_from_returns_with_config;
pub use weights::optimal_weights_with_config;

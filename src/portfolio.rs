//! # Portfolio
//!
//! $$
//! \sigma_p^2 = \mathbf{w}^\top \Sigma \mathbf{w}
//! $$
//!
//! Labelled returns, portfolio construction policies and derived statistics.

mod report;
pub mod returns;
pub mod view;

pub use returns::ReturnTable;
pub use view::mvp_portfolio;
pub use view::optimal_portfolio;
pub use view::portfolio_with_equal_weights;
pub use view::Portfolio;

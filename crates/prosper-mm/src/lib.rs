//! Market making decisions for the Prosper tick trader.
//!
//! Given one product's order book and our position, decide which orders to
//! post this tick:
//! - Fixed fair-value policy: lean on a known fair price
//! - Imbalance policy: skew quotes toward the heavier side of the book
//! - Position limit: every order is checked against the tick-start position
//!
//! # Architecture
//!
//! ```text
//! TradingState.order_depths[symbol] → DecisionEvaluator.evaluate()
//!                                      ├─ StrategyConfig: enabled? which policy?
//!                                      ├─ policy::{fair_value_orders, imbalance_orders}
//!                                      └─ PositionLimit: can_buy / can_sell
//!                                           ↓
//!                                      Vec<Order> for that symbol
//! ```

pub mod config;
pub mod evaluator;
pub mod limit;
pub mod policy;

pub use config::{PolicyConfig, ProductConfig, StrategyConfig};
pub use evaluator::DecisionEvaluator;
pub use limit::PositionLimit;
pub use policy::{book_imbalance, fair_value_orders, imbalance_orders};

//! Per-product decision evaluator.
//!
//! Routes each product to the policy configured for it. The evaluator holds
//! no state between calls: the same book and position always produce the
//! same orders.

use prosper_core::{Order, OrderDepth, Quantity, Symbol};
use tracing::debug;

use crate::config::{PolicyConfig, ProductConfig, StrategyConfig};
use crate::limit::PositionLimit;
use crate::policy::{fair_value_orders, imbalance_orders};

/// Evaluates configured policies against order book snapshots.
#[derive(Debug, Clone)]
pub struct DecisionEvaluator {
    config: StrategyConfig,
    limit: PositionLimit,
}

impl DecisionEvaluator {
    /// Create an evaluator. Fails if the configuration does not validate.
    pub fn new(config: StrategyConfig) -> prosper_core::Result<Self> {
        config.validate()?;
        let limit = PositionLimit::new(config.position_limit);
        Ok(Self { config, limit })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn limit(&self) -> PositionLimit {
        self.limit
    }

    /// Configuration for `symbol` if it is configured and enabled.
    pub fn enabled_product(&self, symbol: &str) -> Option<&ProductConfig> {
        self.config.product(symbol).filter(|p| p.enabled)
    }

    /// Orders for `symbol` this tick.
    ///
    /// Returns `None` when the product is not configured or disabled, so the
    /// caller can leave it out of the result entirely. An enabled product
    /// always yields `Some`, possibly empty.
    pub fn evaluate(
        &self,
        symbol: &Symbol,
        depth: &OrderDepth,
        position: Quantity,
    ) -> Option<Vec<Order>> {
        let product = self.enabled_product(symbol.as_str())?;

        let orders = match &product.policy {
            PolicyConfig::FairValue {
                fair_value,
                order_size,
            } => fair_value_orders(
                symbol,
                depth,
                position,
                self.limit,
                *fair_value,
                *order_size,
            ),
            PolicyConfig::Imbalance {
                threshold,
                order_size,
            } => imbalance_orders(
                symbol,
                depth,
                position,
                self.limit,
                *threshold,
                *order_size,
            ),
        };

        debug!(
            %symbol,
            policy = product.policy.name(),
            book = %depth.state(),
            best_bid = ?depth.best_bid(),
            best_ask = ?depth.best_ask(),
            %position,
            orders = orders.len(),
            "Evaluated product"
        );

        Some(orders)
    }
}

//! Per-tick orchestration.

use std::collections::BTreeMap;

use prosper_core::{Order, Symbol, TraderState, TradingState};
use prosper_mm::{DecisionEvaluator, StrategyConfig};
use prosper_telemetry::TickLogger;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Everything handed back to the harness for one tick, plus the
/// diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutput {
    /// Orders per evaluated product. Products that were skipped are absent.
    pub orders: BTreeMap<Symbol, Vec<Order>>,
    pub conversions: i64,
    /// Encoded trader state for the harness to return next tick.
    pub trader_data: String,
    /// Serialized diagnostic line for this tick.
    pub log_line: String,
}

/// Tick orchestrator.
#[derive(Debug, Clone)]
pub struct Trader {
    evaluator: DecisionEvaluator,
    conversions: i64,
}

impl Trader {
    pub fn new(strategy: StrategyConfig, conversions: i64) -> AppResult<Self> {
        Ok(Self {
            evaluator: DecisionEvaluator::new(strategy)?,
            conversions,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::new(config.strategy.clone(), config.conversions)
    }

    pub fn evaluator(&self) -> &DecisionEvaluator {
        &self.evaluator
    }

    /// Run one tick.
    ///
    /// A trader-state blob that is present but malformed fails the tick.
    pub fn run(&self, state: &TradingState, logger: &mut TickLogger) -> AppResult<TickOutput> {
        let trader_state = TraderState::decode(state.trader_data.as_deref())?;

        let mut orders = BTreeMap::new();
        for (symbol, depth) in &state.order_depths {
            let position = state.position(symbol.as_str());
            let Some(product_orders) = self.evaluator.evaluate(symbol, depth, position) else {
                continue;
            };

            let summary: Vec<String> = product_orders.iter().map(Order::to_string).collect();
            logger.print(format!(
                "{symbol} position={position} orders=[{}]",
                summary.join(", ")
            ));
            orders.insert(symbol.clone(), product_orders);
        }

        let trader_data = trader_state.encode()?;
        let log_line = logger.flush(state, &orders, self.conversions, &trader_data)?;

        debug!(
            timestamp = state.timestamp,
            products = orders.len(),
            orders = orders.values().map(Vec::len).sum::<usize>(),
            "Tick complete"
        );

        Ok(TickOutput {
            orders,
            conversions: self.conversions,
            trader_data,
            log_line,
        })
    }
}

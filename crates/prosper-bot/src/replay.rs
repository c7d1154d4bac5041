//! Replay recorded ticks through the trader.
//!
//! Input is JSON lines, one `TradingState` per line. Each tick's diagnostic
//! line is written to the output as it is produced.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use prosper_core::{Symbol, TradingState};
use prosper_telemetry::TickLogger;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::trader::{TickOutput, Trader};

/// Counters gathered over a replay run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub ticks: u64,
    /// Orders emitted per product.
    pub orders_by_symbol: BTreeMap<Symbol, u64>,
    /// Sum of absolute order quantities per product.
    pub volume_by_symbol: BTreeMap<Symbol, i64>,
}

impl ReplaySummary {
    fn record(&mut self, output: &TickOutput) {
        self.ticks += 1;
        for (symbol, orders) in &output.orders {
            *self.orders_by_symbol.entry(symbol.clone()).or_default() += orders.len() as u64;
            *self.volume_by_symbol.entry(symbol.clone()).or_default() += orders
                .iter()
                .map(|o| o.quantity.abs().inner())
                .sum::<i64>();
        }
    }

    pub fn total_orders(&self) -> u64 {
        self.orders_by_symbol.values().sum()
    }

    /// Emit the summary through tracing.
    pub fn log(&self) {
        info!(
            ticks = self.ticks,
            orders = self.total_orders(),
            "Replay finished"
        );
        for (symbol, count) in &self.orders_by_symbol {
            let volume = self.volume_by_symbol.get(symbol).copied().unwrap_or(0);
            info!(%symbol, orders = count, volume, "Replay product summary");
        }
    }
}

/// Drives a `Trader` over a stream of recorded ticks.
pub struct Replay {
    trader: Trader,
    logger: TickLogger,
    carry_trader_data: bool,
}

impl Replay {
    pub fn new(trader: Trader, logger: TickLogger, carry_trader_data: bool) -> Self {
        Self {
            trader,
            logger,
            carry_trader_data,
        }
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self::new(
            Trader::from_config(config)?,
            TickLogger::new(config.logger.max_log_length),
            config.carry_trader_data,
        ))
    }

    /// Process every tick in `input`, writing one diagnostic line per tick
    /// to `output`. Blank lines are skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> AppResult<ReplaySummary> {
        let mut summary = ReplaySummary::default();
        let mut carried: Option<String> = None;

        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut state: TradingState = serde_json::from_str(&line)
                .map_err(|source| AppError::Input {
                    line: idx + 1,
                    source,
                })?;
            if self.carry_trader_data {
                if let Some(data) = carried.take() {
                    state.trader_data = Some(data);
                }
            }

            let tick = self.trader.run(&state, &mut self.logger)?;
            writeln!(output, "{}", tick.log_line)?;
            debug!(line = idx + 1, timestamp = state.timestamp, "Replayed tick");

            summary.record(&tick);
            carried = Some(tick.trader_data);
        }

        output.flush()?;
        Ok(summary)
    }
}

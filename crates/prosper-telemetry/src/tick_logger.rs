//! Size-bounded per-tick diagnostic line.
//!
//! Each tick produces one compact JSON record:
//!
//! ```text
//! [state, orders, conversions, trader_data_out, logs]
//!
//! state = [timestamp, trader_data_in, listings, order_depths,
//!          own_trades, market_trades, position, observations]
//! ```
//!
//! The structural fields are flattened to positional tuples to save space.
//! The three free-text fields (incoming trader data, outgoing trader data
//! and accumulated log text) share whatever room is left under
//! `max_log_length`, split evenly and truncated with `...`.

use std::collections::BTreeMap;
use std::fmt::{Display, Write as _};

use prosper_core::{Listing, Observation, Order, OrderDepth, Symbol, Trade, TradingState};
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::error::TelemetryResult;

/// Character budget for one tick line.
pub const DEFAULT_MAX_LOG_LENGTH: usize = 3750;

const ELLIPSIS: &str = "...";

/// Accumulates free-text log lines for a tick and serializes the tick on
/// flush.
#[derive(Debug, Clone)]
pub struct TickLogger {
    logs: String,
    max_log_length: usize,
}

impl Default for TickLogger {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOG_LENGTH)
    }
}

impl TickLogger {
    pub fn new(max_log_length: usize) -> Self {
        Self {
            logs: String::new(),
            max_log_length,
        }
    }

    pub fn max_log_length(&self) -> usize {
        self.max_log_length
    }

    /// Append one line to this tick's log text.
    pub fn print(&mut self, line: impl Display) {
        let _ = writeln!(self.logs, "{line}");
    }

    /// Log text accumulated since the last flush.
    pub fn buffered(&self) -> &str {
        &self.logs
    }

    /// Per-field character share given the fixed overhead of a record.
    ///
    /// `overhead + 3 * share <= max_log_length` whenever the overhead itself
    /// fits.
    pub fn field_share(&self, overhead: usize) -> usize {
        self.max_log_length.saturating_sub(overhead) / 3
    }

    /// Serialize the tick to one line and clear the log buffer.
    pub fn flush(
        &mut self,
        state: &TradingState,
        orders: &BTreeMap<Symbol, Vec<Order>>,
        conversions: i64,
        trader_data: &str,
    ) -> TelemetryResult<String> {
        let logs = std::mem::take(&mut self.logs);
        let compressed_orders = compress_orders(orders);

        let skeleton = Value::Array(vec![
            compress_state(state, "")?,
            compressed_orders.clone(),
            json!(conversions),
            json!(""),
            json!(""),
        ]);
        let overhead = serde_json::to_string(&skeleton)?.chars().count();
        if overhead > self.max_log_length {
            warn!(
                overhead,
                max_log_length = self.max_log_length,
                timestamp = state.timestamp,
                "Tick structure alone exceeds the log budget"
            );
        }

        let share = self.field_share(overhead);
        let record = Value::Array(vec![
            compress_state(state, &truncate(state.trader_data(), share))?,
            compressed_orders,
            json!(conversions),
            json!(truncate(trader_data, share)),
            json!(truncate(&logs, share)),
        ]);

        Ok(serde_json::to_string(&record)?)
    }
}

/// Truncate to at most `max_length` characters, marking cuts with `...`.
///
/// Strings that fit are returned unchanged. Longer strings keep their first
/// `max_length - 3` characters and end with `...`, for exactly `max_length`
/// characters in total.
pub fn truncate(value: &str, max_length: usize) -> String {
    if value.chars().count() <= max_length {
        return value.to_string();
    }
    if max_length < ELLIPSIS.len() {
        return ELLIPSIS[..max_length].to_string();
    }

    let keep = max_length - ELLIPSIS.len();
    let mut out: String = value.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

fn compress_state(state: &TradingState, trader_data: &str) -> TelemetryResult<Value> {
    Ok(Value::Array(vec![
        json!(state.timestamp),
        json!(trader_data),
        compress_listings(&state.listings),
        compress_order_depths(&state.order_depths)?,
        compress_trades(&state.own_trades),
        compress_trades(&state.market_trades),
        serde_json::to_value(&state.position)?,
        compress_observations(&state.observations)?,
    ]))
}

fn compress_listings(listings: &BTreeMap<Symbol, Listing>) -> Value {
    listings
        .values()
        .map(|l| json!([l.symbol, l.product, l.denomination]))
        .collect()
}

fn compress_order_depths(depths: &BTreeMap<Symbol, OrderDepth>) -> TelemetryResult<Value> {
    let mut out = Map::new();
    for (symbol, depth) in depths {
        out.insert(
            symbol.to_string(),
            Value::Array(vec![
                serde_json::to_value(&depth.buy_orders)?,
                serde_json::to_value(&depth.sell_orders)?,
            ]),
        );
    }
    Ok(Value::Object(out))
}

fn compress_trades(trades: &BTreeMap<Symbol, Vec<Trade>>) -> Value {
    trades
        .values()
        .flatten()
        .map(|t| {
            json!([
                t.symbol,
                t.price,
                t.quantity,
                t.buyer,
                t.seller,
                t.timestamp
            ])
        })
        .collect()
}

fn compress_observations(observations: &Observation) -> TelemetryResult<Value> {
    let mut conversions = Map::new();
    for (product, o) in &observations.conversion_observations {
        conversions.insert(
            product.to_string(),
            json!([
                o.bid_price,
                o.ask_price,
                o.transport_fees,
                o.export_tariff,
                o.import_tariff,
                o.sugar_price,
                o.sunlight_index
            ]),
        );
    }
    Ok(Value::Array(vec![
        serde_json::to_value(&observations.plain_value_observations)?,
        Value::Object(conversions),
    ]))
}

fn compress_orders(orders: &BTreeMap<Symbol, Vec<Order>>) -> Value {
    orders
        .values()
        .flatten()
        .map(|o| json!([o.symbol, o.price, o.quantity]))
        .collect()
}

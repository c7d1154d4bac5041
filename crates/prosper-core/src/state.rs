//! Per-tick input handed over by the harness.
//!
//! Field names on the wire follow the harness JSON (`traderData`,
//! `plainValueObservations`, ...) so recorded ticks deserialize as-is.

use crate::{OrderDepth, Price, Quantity, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Listing metadata for a tradable symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub symbol: Symbol,
    pub product: Symbol,
    pub denomination: String,
}

/// A fill, either ours or observed in the market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
    #[serde(default)]
    pub buyer: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
}

/// Conversion quote for a product that can be settled off-book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionObservation {
    pub bid_price: f64,
    pub ask_price: f64,
    pub transport_fees: f64,
    pub export_tariff: f64,
    pub import_tariff: f64,
    pub sugar_price: f64,
    pub sunlight_index: f64,
}

/// Market observations for the tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default)]
    pub plain_value_observations: BTreeMap<Symbol, i64>,
    #[serde(default)]
    pub conversion_observations: BTreeMap<Symbol, ConversionObservation>,
}

/// Everything the harness supplies for one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingState {
    /// Trader-state text returned on the previous tick (absent on the first).
    #[serde(rename = "traderData", default)]
    pub trader_data: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub listings: BTreeMap<Symbol, Listing>,
    #[serde(default)]
    pub order_depths: BTreeMap<Symbol, OrderDepth>,
    #[serde(default)]
    pub own_trades: BTreeMap<Symbol, Vec<Trade>>,
    #[serde(default)]
    pub market_trades: BTreeMap<Symbol, Vec<Trade>>,
    /// Current position per product. Missing products are flat.
    #[serde(default)]
    pub position: BTreeMap<Symbol, Quantity>,
    #[serde(default)]
    pub observations: Observation,
}

impl TradingState {
    /// Position for `symbol`, zero when the harness reports none.
    pub fn position(&self, symbol: &str) -> Quantity {
        self.position.get(symbol).copied().unwrap_or(Quantity::ZERO)
    }

    /// Incoming trader-state text, empty when absent.
    pub fn trader_data(&self) -> &str {
        self.trader_data.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: &str = r#"{
        "traderData": "",
        "timestamp": 1100,
        "listings": {
            "KELP": {"symbol": "KELP", "product": "KELP", "denomination": "SEASHELLS"}
        },
        "order_depths": {
            "KELP": {"buy_orders": {"2028": 31}, "sell_orders": {"2032": -31}}
        },
        "own_trades": {},
        "market_trades": {
            "KELP": [{"symbol": "KELP", "price": 2030, "quantity": 2, "buyer": "", "seller": "", "timestamp": 1000}]
        },
        "position": {"KELP": -3},
        "observations": {
            "plainValueObservations": {},
            "conversionObservations": {
                "MAGNIFICENT_MACARONS": {
                    "bidPrice": 640.0, "askPrice": 641.5, "transportFees": 1.2,
                    "exportTariff": 9.0, "importTariff": -2.0,
                    "sugarPrice": 200.1, "sunlightIndex": 60.0
                }
            }
        }
    }"#;

    #[test]
    fn test_deserialize_harness_tick() {
        let state: TradingState = serde_json::from_str(TICK).unwrap();
        assert_eq!(state.timestamp, 1100);
        assert_eq!(state.trader_data(), "");
        assert_eq!(state.position("KELP"), Quantity::new(-3));
        assert_eq!(state.position("SQUID_INK"), Quantity::ZERO);
        assert_eq!(state.order_depths["KELP"].best_bid(), Some(Price::new(2028)));
        assert_eq!(state.market_trades["KELP"][0].buyer.as_deref(), Some(""));

        let conv = &state.observations.conversion_observations["MAGNIFICENT_MACARONS"];
        assert!((conv.import_tariff - -2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_sections_default() {
        let state: TradingState = serde_json::from_str(r#"{"timestamp": 0}"#).unwrap();
        assert!(state.trader_data.is_none());
        assert!(state.order_depths.is_empty());
        assert!(state.observations.plain_value_observations.is_empty());
    }
}

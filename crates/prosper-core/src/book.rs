//! Order book snapshot for a single product.
//!
//! `OrderDepth` mirrors what the harness sends each tick: resting volume per
//! price level on both sides. Sell volumes are negative by harness
//! convention and are kept exactly as received.

use crate::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which sides of the book are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookState {
    /// Both a best bid and a best ask exist.
    TwoSided,
    /// No resting buy orders.
    NoBid,
    /// No resting sell orders.
    NoAsk,
    /// Both sides empty.
    Empty,
}

impl std::fmt::Display for BookState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TwoSided => write!(f, "TWO_SIDED"),
            Self::NoBid => write!(f, "NO_BID"),
            Self::NoAsk => write!(f, "NO_ASK"),
            Self::Empty => write!(f, "EMPTY"),
        }
    }
}

/// Best bid and ask with the volume resting at each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopOfBook {
    pub bid_price: Price,
    /// Bid volume as recorded (positive).
    pub bid_volume: Quantity,
    pub ask_price: Price,
    /// Ask volume as recorded (negative by harness convention).
    pub ask_volume: Quantity,
}

impl TopOfBook {
    /// Spread: ask - bid.
    pub fn spread(&self) -> Price {
        self.ask_price - self.bid_price
    }
}

/// Resting buy/sell volume per price level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDepth {
    #[serde(default)]
    pub buy_orders: BTreeMap<Price, Quantity>,
    #[serde(default)]
    pub sell_orders: BTreeMap<Price, Quantity>,
}

impl OrderDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resting bid level.
    pub fn with_bid(mut self, price: i64, volume: i64) -> Self {
        self.buy_orders.insert(Price::new(price), Quantity::new(volume));
        self
    }

    /// Add a resting ask level. `volume` is stored as given.
    pub fn with_ask(mut self, price: i64, volume: i64) -> Self {
        self.sell_orders.insert(Price::new(price), Quantity::new(volume));
        self
    }

    /// Highest resting buy price.
    pub fn best_bid(&self) -> Option<Price> {
        self.buy_orders.keys().next_back().copied()
    }

    /// Lowest resting sell price.
    pub fn best_ask(&self) -> Option<Price> {
        self.sell_orders.keys().next().copied()
    }

    /// Volume at the best bid, zero when there is no bid.
    pub fn best_bid_volume(&self) -> Quantity {
        self.buy_orders
            .values()
            .next_back()
            .copied()
            .unwrap_or(Quantity::ZERO)
    }

    /// Volume at the best ask as recorded, zero when there is no ask.
    pub fn best_ask_volume(&self) -> Quantity {
        self.sell_orders
            .values()
            .next()
            .copied()
            .unwrap_or(Quantity::ZERO)
    }

    pub fn state(&self) -> BookState {
        match (self.buy_orders.is_empty(), self.sell_orders.is_empty()) {
            (true, true) => BookState::Empty,
            (true, false) => BookState::NoBid,
            (false, true) => BookState::NoAsk,
            (false, false) => BookState::TwoSided,
        }
    }

    /// Best bid and ask together. `None` unless both sides are populated.
    pub fn top_of_book(&self) -> Option<TopOfBook> {
        let (&bid_price, &bid_volume) = self.buy_orders.iter().next_back()?;
        let (&ask_price, &ask_volume) = self.sell_orders.iter().next()?;
        Some(TopOfBook {
            bid_price,
            bid_volume,
            ask_price,
            ask_volume,
        })
    }
}

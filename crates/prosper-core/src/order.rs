//! Orders returned to the harness.
//!
//! An order is a symbol, a limit price and a signed quantity: positive buys,
//! negative sells. Orders live for a single tick.

use crate::{Price, Quantity, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns 1 for buy, -1 for sell (for position calculations).
    pub fn sign(&self) -> i64 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Limit order for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: Symbol,
    pub price: Price,
    /// Signed quantity (positive = buy, negative = sell).
    pub quantity: Quantity,
}

impl Order {
    pub fn new(symbol: Symbol, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol,
            price,
            quantity,
        }
    }

    /// Order on `side` for `size` lots; `size` is taken as a magnitude.
    pub fn on_side(symbol: Symbol, side: OrderSide, price: Price, size: Quantity) -> Self {
        Self::new(symbol, price, Quantity::new(side.sign() * size.abs().inner()))
    }

    pub fn buy(symbol: Symbol, price: Price, size: Quantity) -> Self {
        Self::on_side(symbol, OrderSide::Buy, price, size)
    }

    pub fn sell(symbol: Symbol, price: Price, size: Quantity) -> Self {
        Self::on_side(symbol, OrderSide::Sell, price, size)
    }

    /// Side implied by the quantity sign. Zero-quantity orders count as buys.
    pub fn side(&self) -> OrderSide {
        if self.quantity.is_negative() {
            OrderSide::Sell
        } else {
            OrderSide::Buy
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}x{}",
            self.side(),
            self.symbol,
            self.quantity.abs(),
            self.price
        )
    }
}

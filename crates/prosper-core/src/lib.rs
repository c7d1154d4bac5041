//! Core domain types for the Prosper tick trader.
//!
//! This crate provides the types exchanged with the simulation harness:
//! - `Price`, `Quantity`: Integer tick/lot newtypes
//! - `OrderDepth`: Per-product resting buy/sell volumes
//! - `TradingState`: Everything the harness hands over for one tick
//! - `Order`, `OrderSide`: Orders returned to the harness
//! - `TraderState`: Versioned blob carried between ticks

pub mod book;
pub mod error;
pub mod order;
pub mod state;
pub mod trader_state;
pub mod units;

pub use book::{BookState, OrderDepth, TopOfBook};
pub use error::{CoreError, Result};
pub use order::{Order, OrderSide};
pub use state::{ConversionObservation, Listing, Observation, Trade, TradingState};
pub use trader_state::{TraderState, TRADER_STATE_VERSION};
pub use units::{Price, Quantity, Symbol};

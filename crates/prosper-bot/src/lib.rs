//! Prosper tick trader.
//!
//! Orchestrates one harness tick end to end:
//! - Decode the trader-state blob carried from the previous tick
//! - Run the decision evaluator for every enabled product in the book
//! - Re-encode the trader state and report conversions
//! - Flush the size-bounded diagnostic line
//!
//! The replay driver feeds recorded ticks through the same path.

pub mod config;
pub mod error;
pub mod replay;
pub mod trader;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use replay::{Replay, ReplaySummary};
pub use trader::{TickOutput, Trader};

//! Structured logging and tick diagnostics for the Prosper tick trader.
//!
//! Two separate channels:
//! - Operational logs via `tracing`, written to stderr
//! - One compact, size-bounded JSON line per tick (`TickLogger`), written
//!   to stdout for offline visualisers

pub mod error;
pub mod logging;
pub mod tick_logger;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use tick_logger::{truncate, TickLogger, DEFAULT_MAX_LOG_LENGTH};

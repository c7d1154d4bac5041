//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] prosper_core::CoreError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] prosper_telemetry::TelemetryError),

    #[error("Invalid tick on input line {line}: {source}")]
    Input {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

//! Application configuration.

use crate::error::{AppError, AppResult};
use prosper_mm::StrategyConfig;
use prosper_telemetry::DEFAULT_MAX_LOG_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Tick logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Character budget for one diagnostic line. Default: 3750.
    #[serde(default = "default_max_log_length")]
    pub max_log_length: usize,
}

fn default_max_log_length() -> usize {
    DEFAULT_MAX_LOG_LENGTH
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_log_length: default_max_log_length(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Conversion request reported every tick. Default: 1.
    #[serde(default = "default_conversions")]
    pub conversions: i64,

    /// Replay only: feed each tick's returned trader data into the next
    /// tick, the way the harness does. When false the recorded
    /// `traderData` is used as-is. Default: true.
    #[serde(default = "default_carry_trader_data")]
    pub carry_trader_data: bool,

    #[serde(default)]
    pub logger: LoggerConfig,

    #[serde(default)]
    pub strategy: StrategyConfig,
}

fn default_conversions() -> i64 {
    1
}

fn default_carry_trader_data() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            conversions: default_conversions(),
            carry_trader_data: default_carry_trader_data(),
            logger: LoggerConfig::default(),
            strategy: StrategyConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `PROSPER_CONFIG` or the default path,
    /// falling back to built-in defaults when the file does not exist.
    pub fn load() -> AppResult<Self> {
        let config_path =
            std::env::var("PROSPER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        Self::from_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;
        config.strategy.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosper_core::Quantity;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.conversions, 1);
        assert!(config.carry_trader_data);
        assert_eq!(config.logger.max_log_length, 3750);
        assert_eq!(config.strategy.position_limit, Quantity::new(50));
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
conversions = 0

[logger]
max_log_length = 1000

[strategy]
position_limit = 20

[[strategy.products]]
symbol = "SQUID_INK"
policy = { kind = "imbalance", threshold = 0.25, order_size = 5 }
"#,
        )
        .unwrap();

        assert_eq!(config.conversions, 0);
        assert!(config.carry_trader_data);
        assert_eq!(config.logger.max_log_length, 1000);
        assert_eq!(config.strategy.position_limit, Quantity::new(20));
        assert_eq!(config.strategy.products.len(), 1);
        assert!(config.strategy.product("SQUID_INK").unwrap().enabled);
    }

    #[test]
    fn test_invalid_strategy_is_rejected() {
        let err = AppConfig::from_toml(
            r#"
[strategy]
position_limit = 0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Core(_)));

        let err = AppConfig::from_toml("conversions = \"many\"").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = AppConfig::from_toml(include_str!("../../../config/default.toml")).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.conversions, defaults.conversions);
        assert_eq!(config.logger.max_log_length, defaults.logger.max_log_length);
        assert_eq!(config.strategy.position_limit, defaults.strategy.position_limit);
        assert_eq!(config.strategy.products, defaults.strategy.products);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AppConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}

//! Strategy configuration.

use prosper_core::{CoreError, Price, Quantity, Symbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decision rule for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyConfig {
    /// Buy below and sell above a known fair price.
    FairValue {
        #[serde(default = "default_fair_value")]
        fair_value: Price,
        #[serde(default = "default_fair_value_order_size")]
        order_size: Quantity,
    },
    /// Follow top-of-book volume imbalance.
    Imbalance {
        /// Imbalance beyond ±threshold switches from passive quoting to a
        /// one-sided skew.
        #[serde(default = "default_imbalance_threshold")]
        threshold: Decimal,
        #[serde(default = "default_imbalance_order_size")]
        order_size: Quantity,
    },
}

impl PolicyConfig {
    /// Fair-value rule with default parameters.
    pub fn fair_value() -> Self {
        Self::FairValue {
            fair_value: default_fair_value(),
            order_size: default_fair_value_order_size(),
        }
    }

    /// Imbalance rule with default parameters.
    pub fn imbalance() -> Self {
        Self::Imbalance {
            threshold: default_imbalance_threshold(),
            order_size: default_imbalance_order_size(),
        }
    }

    pub fn order_size(&self) -> Quantity {
        match self {
            Self::FairValue { order_size, .. } | Self::Imbalance { order_size, .. } => *order_size,
        }
    }

    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FairValue { .. } => "fair_value",
            Self::Imbalance { .. } => "imbalance",
        }
    }
}

/// Per-product strategy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub symbol: Symbol,

    /// Disabled products are left alone even when the harness quotes them.
    #[serde(default = "default_true")]
    pub enabled: bool,

    pub policy: PolicyConfig,
}

impl ProductConfig {
    pub fn new(symbol: impl Into<Symbol>, enabled: bool, policy: PolicyConfig) -> Self {
        Self {
            symbol: symbol.into(),
            enabled,
            policy,
        }
    }
}

/// Strategy configuration across all products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Symmetric position limit applied to every product.
    #[serde(default = "default_position_limit")]
    pub position_limit: Quantity,

    /// Products the trader knows about.
    #[serde(default = "default_products")]
    pub products: Vec<ProductConfig>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            position_limit: default_position_limit(),
            products: default_products(),
        }
    }
}

impl StrategyConfig {
    /// Look up a product by symbol.
    pub fn product(&self, symbol: &str) -> Option<&ProductConfig> {
        self.products.iter().find(|p| p.symbol.as_str() == symbol)
    }

    /// Enabled products, in configuration order.
    pub fn enabled_products(&self) -> impl Iterator<Item = &ProductConfig> {
        self.products.iter().filter(|p| p.enabled)
    }

    /// Reject settings the policies cannot act on.
    pub fn validate(&self) -> prosper_core::Result<()> {
        if !self.position_limit.is_positive() {
            return Err(CoreError::InvalidConfig(format!(
                "position_limit must be positive, got {}",
                self.position_limit
            )));
        }

        for (i, product) in self.products.iter().enumerate() {
            if self.products[..i].iter().any(|p| p.symbol == product.symbol) {
                return Err(CoreError::InvalidConfig(format!(
                    "duplicate product {}",
                    product.symbol
                )));
            }

            let size = product.policy.order_size();
            if !size.is_positive() {
                return Err(CoreError::InvalidConfig(format!(
                    "{}: order_size must be positive, got {size}",
                    product.symbol
                )));
            }

            if let PolicyConfig::Imbalance { threshold, .. } = &product.policy {
                if *threshold < Decimal::ZERO || *threshold > Decimal::ONE {
                    return Err(CoreError::InvalidConfig(format!(
                        "{}: imbalance threshold must be within [0, 1], got {threshold}",
                        product.symbol
                    )));
                }
            }
        }

        Ok(())
    }
}

fn default_true() -> bool {
    true
}
fn default_position_limit() -> Quantity {
    Quantity::new(50)
}
fn default_fair_value() -> Price {
    Price::new(10_000)
}
fn default_fair_value_order_size() -> Quantity {
    Quantity::new(15)
}
fn default_imbalance_threshold() -> Decimal {
    Decimal::new(5, 1) // 0.5
}
fn default_imbalance_order_size() -> Quantity {
    Quantity::new(10)
}
fn default_products() -> Vec<ProductConfig> {
    vec![
        ProductConfig::new("RAINFOREST_RESIN", true, PolicyConfig::fair_value()),
        ProductConfig::new("KELP", false, PolicyConfig::imbalance()),
        ProductConfig::new("SQUID_INK", false, PolicyConfig::imbalance()),
    ]
}

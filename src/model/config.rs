use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from itinerary.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Show the Expenses view
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_payer")]
    pub default_payer: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            enabled: true,
            default_payer: default_payer(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_payer() -> String {
    "純純".to_string()
}

fn default_currency_symbol() -> String {
    "¥".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme overrides by key (`background`, `highlight`, ...), as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Per-tag colors, as `#RRGGBB`
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
    /// Per-category colors keyed by category name, as `#RRGGBB`
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

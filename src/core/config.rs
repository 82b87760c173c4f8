//! Configuration management
//!
//! All defaults are explicit here instead of being baked into pre-set field
//! values. The configuration is built in-memory at startup and served to the
//! frontend; nothing is read from or written to disk.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: FieldDefaults,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: FieldDefaults::default(),
            display: DisplayConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

/// Pre-filled values for the input fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefaults {
    /// Minutes-active default
    #[serde(default)]
    pub minutes: u32,
    /// Electricity tariff default in currency per kWh
    /// (average Dutch household tariff, 2019)
    #[serde(default = "default_tariff")]
    pub tariff: f64,
}

fn default_tariff() -> f64 {
    0.2173
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            minutes: 0,
            tariff: default_tariff(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol shown next to every cost output
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "\u{20AC}".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Window geometry and placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Logical window width in pixels
    #[serde(default = "default_width")]
    pub width: f64,
    /// Logical window height in pixels
    #[serde(default = "default_height")]
    pub height: f64,
    /// Horizontal offset subtracted from the screen centre
    #[serde(default = "default_center_bias_x")]
    pub center_bias_x: f64,
    /// Vertical offset subtracted from the screen centre
    #[serde(default = "default_center_bias_y")]
    pub center_bias_y: f64,
}

fn default_width() -> f64 {
    396.0
}
fn default_height() -> f64 {
    268.0
}
fn default_center_bias_x() -> f64 {
    198.0
}
fn default_center_bias_y() -> f64 {
    200.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            center_bias_x: default_center_bias_x(),
            center_bias_y: default_center_bias_y(),
        }
    }
}

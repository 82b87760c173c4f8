//! Common types used across the application

use serde::{Deserialize, Serialize};

use crate::calc::{self, CalculationResult, FormattedResult};
use crate::core::Result;

/// The raw text content of the four input fields, exactly as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInputs {
    /// Power draw field
    pub power: String,
    /// Hours-active field
    pub hours: String,
    /// Minutes-active field
    pub minutes: String,
    /// Tariff field in currency per kWh
    pub tariff: String,
}

impl RawInputs {
    pub fn new(power: &str, hours: &str, minutes: &str, tariff: &str) -> Self {
        Self {
            power: power.to_string(),
            hours: hours.to_string(),
            minutes: minutes.to_string(),
            tariff: tariff.to_string(),
        }
    }
}

/// Application runtime state (not persisted)
pub struct AppState {
    /// Result of the last successful calculation, `None` before the first one
    pub last_result: Option<CalculationResult>,
}

impl AppState {
    pub fn new() -> Self {
        Self { last_result: None }
    }

    /// Parse the raw field values, recompute and store the result.
    ///
    /// The stored result is replaced only on success; any parse failure
    /// leaves it untouched so the displayed outputs keep their prior values.
    pub fn recalculate(&mut self, raw: &RawInputs) -> Result<FormattedResult> {
        let usage = calc::DeviceUsage::parse(raw)?;
        let result = calc::calculate(&usage);
        let formatted = result.formatted();
        self.last_result = Some(result);
        Ok(formatted)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

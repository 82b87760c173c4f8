//! Energy and cost calculation
//!
//! The pipeline is parse -> compute -> format:
//! - `DeviceUsage::parse` turns the raw field strings into validated numbers
//! - `calculate` derives annual energy and the four cost figures
//! - `CalculationResult::formatted` renders the fixed-precision display
//!   strings, including the trailing padding that lines the decimal points up
//!   in the monospace output column

use serde::{Deserialize, Serialize};

use crate::core::{Error, RawInputs, Result};

/// Days per year used for all annual projections
const DAYS_PER_YEAR: f64 = 365.0;

/// Validated calculation inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceUsage {
    /// Power draw in watts
    pub watts: u32,
    /// Whole hours active per day
    pub hours: u32,
    /// Additional minutes active per day
    pub minutes: u32,
    /// Electricity tariff in currency per kWh
    pub tariff: f64,
}

impl DeviceUsage {
    /// Parse the raw field values.
    ///
    /// Watts, hours and minutes must be non-negative integers; the tariff
    /// must be a non-negative decimal. The keystroke filters should already
    /// guarantee most of this, but every field is re-read and re-parsed on
    /// each calculation, so empty or transient values (a lone ".") still
    /// surface here.
    pub fn parse(raw: &RawInputs) -> Result<Self> {
        let watts = raw
            .power
            .parse::<u32>()
            .map_err(|_| Error::invalid_integer("power"))?;
        let hours = raw
            .hours
            .parse::<u32>()
            .map_err(|_| Error::invalid_integer("hours"))?;
        let minutes = raw
            .minutes
            .parse::<u32>()
            .map_err(|_| Error::invalid_integer("minutes"))?;
        let tariff = raw
            .tariff
            .parse::<f64>()
            .map_err(|_| Error::invalid_decimal("tariff"))?;
        if !tariff.is_finite() || tariff < 0.0 {
            return Err(Error::invalid_decimal("tariff"));
        }

        Ok(Self {
            watts,
            hours,
            minutes,
            tariff,
        })
    }

    /// Active time per day in fractional hours
    pub fn total_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }
}

/// Derived energy and cost figures
///
/// Always recomputed as a whole from one set of inputs; the cost fields are
/// derived from each other (day from year, week from day, month from year),
/// never independently from the raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Energy consumption in kWh per year
    pub kwh_per_year: f64,
    /// Cost per day
    pub cost_per_day: f64,
    /// Cost per week
    pub cost_per_week: f64,
    /// Cost per month
    pub cost_per_month: f64,
    /// Cost per year
    pub cost_per_year: f64,
}

/// Compute annual energy use and the cost breakdown for a device
pub fn calculate(usage: &DeviceUsage) -> CalculationResult {
    let kwh_per_year = f64::from(usage.watts) * usage.total_hours() * DAYS_PER_YEAR / 1000.0;
    let cost_per_year = kwh_per_year * usage.tariff;
    let cost_per_day = cost_per_year / DAYS_PER_YEAR;
    let cost_per_week = cost_per_day * 7.0;
    let cost_per_month = cost_per_year / 12.0;

    log::debug!(
        "calculated {:.1} kWh/year at {} W for {:.2} h/day",
        kwh_per_year,
        usage.watts,
        usage.total_hours()
    );

    CalculationResult {
        kwh_per_year,
        cost_per_day,
        cost_per_week,
        cost_per_month,
        cost_per_year,
    }
}

/// Display strings for the five output fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub kwh_per_year: String,
    pub cost_per_day: String,
    pub cost_per_week: String,
    pub cost_per_month: String,
    pub cost_per_year: String,
}

impl CalculationResult {
    /// Render the fixed-precision display strings.
    ///
    /// Each cost value keeps fractional digits + trailing spaces at five
    /// columns (day 5+0, week 4+1, month 3+2, year 2+3) so the decimal
    /// points align when the values are right-aligned in a monospace font.
    pub fn formatted(&self) -> FormattedResult {
        FormattedResult {
            kwh_per_year: format!("{:.1}", self.kwh_per_year),
            cost_per_day: format!("{:.5}", self.cost_per_day),
            cost_per_week: format!("{:.4} ", self.cost_per_week),
            cost_per_month: format!("{:.3}  ", self.cost_per_month),
            cost_per_year: format!("{:.2}   ", self.cost_per_year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(watts: u32, hours: u32, minutes: u32, tariff: f64) -> DeviceUsage {
        DeviceUsage {
            watts,
            hours,
            minutes,
            tariff,
        }
    }

    #[test]
    fn test_total_hours() {
        assert_eq!(usage(100, 5, 30, 0.0).total_hours(), 5.5);
        assert_eq!(usage(100, 0, 0, 0.0).total_hours(), 0.0);
        assert_eq!(usage(100, 24, 0, 0.0).total_hours(), 24.0);
    }

    #[test]
    fn test_annual_energy() {
        // 100 W for 5 h 30 min every day: 100 * 5.5 * 365 / 1000
        let result = calculate(&usage(100, 5, 30, 0.2173));
        assert_eq!(result.kwh_per_year, 200.75);
    }

    #[test]
    fn test_derived_value_chain() {
        let result = calculate(&usage(60, 8, 15, 0.25));
        assert_eq!(result.cost_per_year, result.kwh_per_year * 0.25);
        assert_eq!(result.cost_per_day, result.cost_per_year / 365.0);
        assert_eq!(result.cost_per_week, result.cost_per_day * 7.0);
        assert_eq!(result.cost_per_month, result.cost_per_year / 12.0);
    }

    #[test]
    fn test_reference_example_formatting() {
        let formatted = calculate(&usage(100, 5, 30, 0.2173)).formatted();
        assert_eq!(formatted.kwh_per_year, "200.8");
        assert_eq!(formatted.cost_per_year, "43.62   ");
        assert_eq!(formatted.cost_per_day, "0.11952");
        assert_eq!(formatted.cost_per_week, "0.8366 ");
        assert_eq!(formatted.cost_per_month, "3.635  ");
    }

    #[test]
    fn test_zero_watt_device() {
        let formatted = calculate(&usage(0, 5, 30, 0.2173)).formatted();
        assert_eq!(formatted.kwh_per_year, "0.0");
        assert_eq!(formatted.cost_per_day, "0.00000");
        assert_eq!(formatted.cost_per_week, "0.0000 ");
        assert_eq!(formatted.cost_per_month, "0.000  ");
        assert_eq!(formatted.cost_per_year, "0.00   ");
    }

    #[test]
    fn test_parse_valid_inputs() {
        let raw = RawInputs::new("100", "5", "30", "0.2173");
        let parsed = DeviceUsage::parse(&raw).unwrap();
        assert_eq!(parsed, usage(100, 5, 30, 0.2173));
    }

    #[test]
    fn test_parse_rejects_empty_required_field() {
        let raw = RawInputs::new("", "5", "30", "0.2173");
        assert!(DeviceUsage::parse(&raw).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in [
            RawInputs::new("1o0", "5", "30", "0.2173"),
            RawInputs::new("100", "-5", "30", "0.2173"),
            RawInputs::new("100", "5", "3.5", "0.2173"),
            RawInputs::new("100", "5", "30", "."),
            RawInputs::new("100", "5", "30", ""),
        ] {
            assert!(DeviceUsage::parse(&raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn test_parse_accepts_transient_decimal_states() {
        // "0." is a legitimate intermediate tariff entry and parses as 0.0
        let raw = RawInputs::new("100", "5", "30", "0.");
        assert_eq!(DeviceUsage::parse(&raw).unwrap().tariff, 0.0);
    }
}

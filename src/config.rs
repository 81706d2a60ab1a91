//! TOML-based advisor configuration.
//!
//! Every sizing constant used by the calculators lives here so the formulas
//! stay auditable. All fields default to the storefront's published values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level advisor configuration parsed from TOML.
///
/// Load from TOML with [`AdvisorConfig::from_toml_file`] or use
/// [`AdvisorConfig::default`] for the built-in values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvisorConfig {
    /// Battery/inverter sizing parameters.
    #[serde(default)]
    pub battery: BatteryParams,
    /// Solar sizing and financial parameters.
    #[serde(default)]
    pub solar: SolarParams,
    /// Quote message settings.
    #[serde(default)]
    pub quote: QuoteConfig,
}

/// Battery/inverter sizing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryParams {
    /// Nominal battery bank voltage (V).
    pub system_voltage: f64,
    /// Round-trip efficiency (0.0–1.0].
    pub efficiency: f64,
    /// Inverter headroom multiplier for inrush and peak load.
    pub inverter_safety_factor: f64,
}

impl Default for BatteryParams {
    fn default() -> Self {
        Self {
            system_voltage: 12.0,
            efficiency: 0.8,
            inverter_safety_factor: 1.25,
        }
    }
}

/// Solar sizing and financial parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarParams {
    /// Average tariff (currency per unit).
    pub rate_per_unit: f64,
    /// Monthly generation of 1 kW of panels (units).
    pub units_per_kw_per_month: f64,
    /// Roof area needed per kW (sq ft).
    pub sqft_per_kw: f64,
    /// Installed cost per kW (currency).
    pub cost_per_kw: f64,
    /// Panels per kW of capacity.
    pub panels_per_kw: u32,
    /// Savings cap as a fraction of the current bill.
    pub max_savings_fraction: f64,
    /// Smallest system offered (kW).
    pub min_system_kw: f64,
    /// Largest residential system (kW).
    pub max_residential_kw: f64,
    /// Largest commercial system (kW).
    pub max_commercial_kw: f64,
    /// Residential sizes offered (kW, ascending).
    pub residential_sizes: Vec<u32>,
    /// Commercial sizes offered (kW, ascending).
    pub commercial_sizes: Vec<u32>,
}

impl Default for SolarParams {
    fn default() -> Self {
        Self {
            rate_per_unit: 6.0,
            units_per_kw_per_month: 120.0,
            sqft_per_kw: 100.0,
            cost_per_kw: 60_000.0,
            panels_per_kw: 3,
            max_savings_fraction: 0.8,
            min_system_kw: 3.0,
            max_residential_kw: 10.0,
            max_commercial_kw: 50.0,
            residential_sizes: vec![3, 5, 7, 10],
            commercial_sizes: vec![3, 5, 10, 15, 20, 25, 30],
        }
    }
}

/// Quote message settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteConfig {
    /// Address quote requests are sent to.
    pub recipient: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            recipient: "sales@example.com".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field} — {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"solar.rate_per_unit"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl AdvisorConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let b = &self.battery;
        positive(&mut errors, "battery.system_voltage", b.system_voltage);
        if !(b.efficiency > 0.0 && b.efficiency <= 1.0) {
            errors.push(ConfigError::new("battery.efficiency", "must be in (0.0, 1.0]"));
        }
        if !(b.inverter_safety_factor >= 1.0) {
            errors.push(ConfigError::new(
                "battery.inverter_safety_factor",
                "must be >= 1.0",
            ));
        }

        let s = &self.solar;
        positive(&mut errors, "solar.rate_per_unit", s.rate_per_unit);
        positive(&mut errors, "solar.units_per_kw_per_month", s.units_per_kw_per_month);
        positive(&mut errors, "solar.sqft_per_kw", s.sqft_per_kw);
        positive(&mut errors, "solar.cost_per_kw", s.cost_per_kw);
        positive(&mut errors, "solar.min_system_kw", s.min_system_kw);
        if s.panels_per_kw == 0 {
            errors.push(ConfigError::new("solar.panels_per_kw", "must be > 0"));
        }
        if !(s.max_savings_fraction > 0.0 && s.max_savings_fraction <= 1.0) {
            errors.push(ConfigError::new(
                "solar.max_savings_fraction",
                "must be in (0.0, 1.0]",
            ));
        }
        if s.max_residential_kw < s.min_system_kw {
            errors.push(ConfigError::new(
                "solar.max_residential_kw",
                "must be >= solar.min_system_kw",
            ));
        }
        if s.max_commercial_kw < s.min_system_kw {
            errors.push(ConfigError::new(
                "solar.max_commercial_kw",
                "must be >= solar.min_system_kw",
            ));
        }
        sizes(&mut errors, "solar.residential_sizes", &s.residential_sizes);
        sizes(&mut errors, "solar.commercial_sizes", &s.commercial_sizes);

        if self.quote.recipient.trim().is_empty() {
            errors.push(ConfigError::new("quote.recipient", "must not be empty"));
        }

        errors
    }
}

fn positive(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(ConfigError::new(field, "must be > 0"));
    }
}

fn sizes(errors: &mut Vec<ConfigError>, field: &str, values: &[u32]) {
    if values.is_empty() {
        errors.push(ConfigError::new(field, "must not be empty"));
    } else if values.windows(2).any(|w| w[0] >= w[1]) {
        errors.push(ConfigError::new(field, "must be strictly ascending"));
    }
}

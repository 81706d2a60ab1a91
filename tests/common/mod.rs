//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use power_advisor::config::{AdvisorConfig, BatteryParams, SolarParams};
use power_advisor::load::{ApplianceSelection, CustomAppliance};

/// Built-in configuration.
pub fn default_config() -> AdvisorConfig {
    AdvisorConfig::default()
}

pub fn battery_params() -> BatteryParams {
    BatteryParams::default()
}

pub fn solar_params() -> SolarParams {
    SolarParams::default()
}

/// Selection from `(id, quantity)` pairs. Panics on an unknown id.
pub fn selection(items: &[(&str, u32)]) -> ApplianceSelection {
    let mut selection = ApplianceSelection::new();
    for &(id, qty) in items {
        selection
            .set(id, qty)
            .unwrap_or_else(|e| panic!("fixture selection {id}: {e}"));
    }
    selection
}

/// Four lights and two fans: 390 W.
pub fn lights_and_fans() -> ApplianceSelection {
    selection(&[("lights", 4), ("fans", 2)])
}

/// A single custom appliance.
pub fn custom(name: &str, wattage: u32, quantity: u32) -> CustomAppliance {
    CustomAppliance::new(name, wattage, quantity).expect("fixture custom appliance is valid")
}

//! Battery and inverter sizing from an appliance load.
//!
//! The load is converted into a required battery capacity and inverter
//! rating, both rounded up, and then matched against fixed combo bands.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{ComboBand, ProductRecord};
use crate::config::BatteryParams;
use crate::load::{ApplianceSelection, CustomAppliance, total_load};

/// Largest battery (Ah) and inverter (VA) the base combo covers.
pub const BASE_BAND_LIMITS: (u64, u64) = (150, 1050);
/// Largest battery (Ah) and inverter (VA) the mid combo covers.
pub const MID_BAND_LIMITS: (u64, u64) = (200, 1500);

/// Sized battery/inverter pair for a given load and backup duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryRecommendation {
    /// Total simultaneous draw (W).
    pub total_load_w: u64,
    /// Requested backup duration (h).
    pub backup_hours: f64,
    /// Battery capacity needed, rounded up (Ah).
    pub required_battery_ah: u64,
    /// Inverter rating needed, rounded up (VA).
    pub required_inverter_va: u64,
    /// Band the requirements fell into.
    pub band: ComboBand,
    pub battery: ProductRecord,
    pub inverter: ProductRecord,
    pub explanation: String,
}

/// Battery capacity needed to carry `load_w` for `hours` (Ah, ceiling).
///
/// `capacity = load × hours / voltage / efficiency`
///
/// # Examples
///
/// ```
/// use power_advisor::battery::required_battery_ah;
/// use power_advisor::config::BatteryParams;
///
/// assert_eq!(required_battery_ah(390, 4.0, &BatteryParams::default()), 163);
/// ```
pub fn required_battery_ah(load_w: u64, hours: f64, params: &BatteryParams) -> u64 {
    let capacity = (load_w as f64 * hours) / params.system_voltage / params.efficiency;
    capacity.ceil() as u64
}

/// Inverter rating needed for `load_w` with safety headroom (VA, ceiling).
pub fn required_inverter_va(load_w: u64, params: &BatteryParams) -> u64 {
    (load_w as f64 * params.inverter_safety_factor).ceil() as u64
}

/// Picks the combo band. First match wins:
/// zero load, then base limits, then mid limits, else industrial.
pub fn select_band(total_load_w: u64, battery_ah: u64, inverter_va: u64) -> ComboBand {
    let (base_ah, base_va) = BASE_BAND_LIMITS;
    let (mid_ah, mid_va) = MID_BAND_LIMITS;
    if total_load_w == 0 {
        ComboBand::NoLoad
    } else if battery_ah <= base_ah && inverter_va <= base_va {
        ComboBand::Base
    } else if battery_ah <= mid_ah && inverter_va <= mid_va {
        ComboBand::Mid
    } else {
        ComboBand::Industrial
    }
}

/// Hours with one decimal, ties rounded away from zero (2.25 → "2.3").
fn one_decimal(hours: f64) -> String {
    format!("{:.1}", (hours * 10.0).round() / 10.0)
}

fn explanation(band: ComboBand, load_w: u64, hours: f64) -> String {
    let hours = one_decimal(hours);
    match band {
        ComboBand::NoLoad => "Select appliances from the list above to get your personalized \
                              recommendation."
            .to_string(),
        ComboBand::Base => format!(
            "Perfect for your {load_w}W load with {hours} hours backup. This combo provides \
             reliable power for essential appliances."
        ),
        ComboBand::Mid => format!(
            "Ideal for your {load_w}W load with {hours} hours backup. This premium combo \
             handles high power requirements and is solar-compatible for future expansion."
        ),
        ComboBand::Industrial => format!(
            "Your {load_w}W load with {hours} hours backup requires a custom industrial \
             solution. Please contact us for a personalized quote."
        ),
    }
}

/// Computes the full battery/inverter recommendation.
///
/// Pure and deterministic. `backup_hours` is not bounded here; callers
/// are expected to pass a positive value.
pub fn recommend(
    selection: &ApplianceSelection,
    backup_hours: f64,
    custom: &[CustomAppliance],
    params: &BatteryParams,
) -> BatteryRecommendation {
    let total_load_w = total_load(selection, custom);
    let required_battery_ah = required_battery_ah(total_load_w, backup_hours, params);
    let required_inverter_va = required_inverter_va(total_load_w, params);
    let band = select_band(total_load_w, required_battery_ah, required_inverter_va);

    debug!(
        total_load_w,
        backup_hours, required_battery_ah, required_inverter_va, ?band, "battery sizing"
    );

    BatteryRecommendation {
        total_load_w,
        backup_hours,
        required_battery_ah,
        required_inverter_va,
        band,
        battery: band.battery(),
        inverter: band.inverter(),
        explanation: explanation(band, total_load_w, backup_hours),
    }
}

impl fmt::Display for BatteryRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "load={}W backup={:.1}h | need {}Ah / {}VA | {} + {}",
            self.total_load_w,
            self.backup_hours,
            self.required_battery_ah,
            self.required_inverter_va,
            self.battery.name,
            self.inverter.name,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn params() -> BatteryParams {
        BatteryParams::default()
    }

    fn selection(pairs: &[(&str, u32)]) -> ApplianceSelection {
        let mut s = ApplianceSelection::new();
        for &(id, q) in pairs {
            s.set(id, q).expect("known id");
        }
        s
    }

    #[test]
    fn lights_and_fans_land_in_mid_band() {
        let rec = recommend(&selection(&[("lights", 4), ("fans", 2)]), 4.0, &[], &params());
        assert_eq!(rec.total_load_w, 390);
        assert_eq!(rec.required_battery_ah, 163);
        assert_eq!(rec.required_inverter_va, 488);
        assert_eq!(rec.band, ComboBand::Mid);
        assert_eq!(rec.battery.name, "Exide Inva Master 200Ah");
        assert_eq!(rec.inverter.name, "Exide 1500VA MPPT");
        assert_eq!(
            rec.explanation,
            "Ideal for your 390W load with 4.0 hours backup. This premium combo handles high \
             power requirements and is solar-compatible for future expansion."
        );
    }

    #[test]
    fn zero_load_gives_placeholder() {
        let rec = recommend(&ApplianceSelection::new(), 4.0, &[], &params());
        assert_eq!(rec.total_load_w, 0);
        assert_eq!(rec.required_battery_ah, 0);
        assert_eq!(rec.required_inverter_va, 0);
        assert_eq!(rec.band, ComboBand::NoLoad);
        assert_eq!(rec.battery.name, "No battery needed");
        assert_eq!(rec.inverter.capacity, "0VA");
        assert!(rec.explanation.starts_with("Select appliances"));
    }

    #[test]
    fn exact_base_boundary_stays_in_base() {
        // 6 lights = 360 W; 360 × 4 / 12 / 0.8 = 150 Ah
        let rec = recommend(&selection(&[("lights", 6)]), 4.0, &[], &params());
        assert_eq!(rec.required_battery_ah, 150);
        assert_eq!(rec.band, ComboBand::Base);
        assert_eq!(
            rec.explanation,
            "Perfect for your 360W load with 4.0 hours backup. This combo provides reliable \
             power for essential appliances."
        );
    }

    #[test]
    fn air_conditioner_goes_industrial() {
        let rec = recommend(&selection(&[("ac", 1)]), 4.0, &[], &params());
        assert_eq!(rec.required_battery_ah, 625);
        assert_eq!(rec.required_inverter_va, 1875);
        assert_eq!(rec.band, ComboBand::Industrial);
        assert!(rec.explanation.ends_with("Please contact us for a personalized quote."));
    }

    #[test]
    fn custom_appliances_count_towards_load() {
        let custom = vec![CustomAppliance::new("Microwave", 800, 1).unwrap()];
        let rec = recommend(&ApplianceSelection::new(), 2.0, &custom, &params());
        assert_eq!(rec.total_load_w, 800);
        assert_eq!(rec.required_inverter_va, 1000);
    }

    #[rstest]
    #[case(0, 0, 0, ComboBand::NoLoad)]
    #[case(1, 150, 1050, ComboBand::Base)]
    #[case(1, 151, 1050, ComboBand::Mid)]
    #[case(1, 150, 1051, ComboBand::Mid)]
    #[case(1, 200, 1500, ComboBand::Mid)]
    #[case(1, 201, 100, ComboBand::Industrial)]
    #[case(1, 10, 1501, ComboBand::Industrial)]
    fn band_thresholds(
        #[case] load: u64,
        #[case] ah: u64,
        #[case] va: u64,
        #[case] expected: ComboBand,
    ) {
        assert_eq!(select_band(load, ah, va), expected);
    }

    #[test]
    fn half_hour_backup_is_formatted_with_one_decimal() {
        let rec = recommend(&selection(&[("tv", 1)]), 2.5, &[], &params());
        assert!(rec.explanation.contains("150W load with 2.5 hours backup"));
    }

    #[test]
    fn tied_hours_round_up() {
        assert_eq!(one_decimal(2.25), "2.3");
        assert_eq!(one_decimal(4.0), "4.0");
        let rec = recommend(&selection(&[("tv", 1)]), 2.25, &[], &params());
        assert!(rec.explanation.contains("150W load with 2.3 hours backup"));
    }

    #[test]
    fn higher_voltage_lowers_capacity() {
        let p = BatteryParams {
            system_voltage: 24.0,
            ..BatteryParams::default()
        };
        assert_eq!(required_battery_ah(390, 4.0, &p), 82);
    }

    #[test]
    fn display_does_not_panic() {
        let rec = recommend(&selection(&[("fridge", 1)]), 6.0, &[], &params());
        let s = format!("{rec}");
        assert!(s.contains("200W"));
    }
}

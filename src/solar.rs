//! Rooftop solar sizing and payback estimate from a monthly electricity bill.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SolarParams;
use crate::format::format_inr;

/// Where the system is installed. Selects the size cap and catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InstallationType {
    Residential,
    Commercial,
}

impl InstallationType {
    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            InstallationType::Residential => "residential",
            InstallationType::Commercial => "commercial",
        }
    }

    /// System description shown with the recommendation.
    pub fn system_type(self) -> &'static str {
        match self {
            InstallationType::Residential => "Off-Grid Solar System with Battery Backup",
            InstallationType::Commercial => "On-Grid Solar System",
        }
    }
}

impl fmt::Display for InstallationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallationType::Residential => f.write_str("Residential"),
            InstallationType::Commercial => f.write_str("Commercial"),
        }
    }
}

/// What the customer wants the system to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SolarGoal {
    /// Offset most, not all, of consumption.
    ReduceBills,
    /// Offset all consumption with margin.
    Independence,
    /// Small array paired with storage.
    Backup,
    /// Balance of offset and cost.
    Environmental,
}

impl SolarGoal {
    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            SolarGoal::ReduceBills => "reduce_bills",
            SolarGoal::Independence => "independence",
            SolarGoal::Backup => "backup",
            SolarGoal::Environmental => "environmental",
        }
    }

    /// Multiplier applied to the consumption-matched size.
    pub fn sizing_factor(self) -> f64 {
        match self {
            SolarGoal::ReduceBills => 0.75,
            SolarGoal::Independence => 1.2,
            SolarGoal::Backup => 0.6,
            SolarGoal::Environmental => 0.8,
        }
    }
}

/// Savings in currency units, rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Savings {
    pub monthly: u64,
    pub annual: u64,
}

/// Sized solar system with its financial estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarRecommendation {
    pub installation_type: InstallationType,
    pub goal: SolarGoal,
    /// Bill the estimate is based on (currency/month).
    pub monthly_bill: f64,
    /// Roof area the customer has (sq ft).
    pub roof_space: f64,
    /// Consumption implied by the bill (units/month).
    pub estimated_monthly_units: u64,
    /// Recommended size, one of the standard sizes (kW).
    pub system_size_kw: u32,
    pub system_type: &'static str,
    pub panel_count: u32,
    pub estimated_monthly_savings: u64,
    pub estimated_annual_savings: u64,
    pub estimated_cost: u64,
    /// Years to recover the cost, one decimal. `None` when there are no savings.
    pub payback_years: Option<f64>,
    /// Roof area the goal-derived size would need (sq ft).
    pub roof_space_needed: f64,
    pub is_roof_sufficient: bool,
    pub explanation: String,
}

/// Consumption implied by a bill at the average tariff (units, ceiling).
pub fn estimate_monthly_units(monthly_bill: f64, params: &SolarParams) -> u64 {
    (monthly_bill / params.rate_per_unit).ceil() as u64
}

/// Goal-adjusted size, rounded to 0.5 kW and clamped to the installation range.
pub fn goal_system_size(
    monthly_units: u64,
    goal: SolarGoal,
    installation: InstallationType,
    params: &SolarParams,
) -> f64 {
    let base_kw = monthly_units as f64 / params.units_per_kw_per_month;
    let adjusted = base_kw * goal.sizing_factor();
    let rounded = (adjusted * 2.0).round() / 2.0;
    let cap = match installation {
        InstallationType::Residential => params.max_residential_kw,
        InstallationType::Commercial => params.max_commercial_kw,
    };
    rounded.max(params.min_system_kw).min(cap)
}

/// Roof area a system of `system_kw` occupies (sq ft).
pub fn roof_space_required(system_kw: f64, params: &SolarParams) -> f64 {
    system_kw * params.sqft_per_kw
}

pub fn is_roof_sufficient(system_kw: f64, available_sqft: f64, params: &SolarParams) -> bool {
    available_sqft >= roof_space_required(system_kw, params)
}

/// Largest whole-kW system the roof holds, never below the minimum size.
///
/// With a very small roof the minimum wins, so the result can still need
/// more area than is available.
pub fn roof_limited_size(available_sqft: f64, params: &SolarParams) -> f64 {
    (available_sqft / params.sqft_per_kw)
        .floor()
        .max(params.min_system_kw)
}

/// Standard sizes for an installation type.
pub fn standard_sizes(installation: InstallationType, params: &SolarParams) -> &[u32] {
    match installation {
        InstallationType::Residential => &params.residential_sizes,
        InstallationType::Commercial => &params.commercial_sizes,
    }
}

/// Nearest entry of `sizes` to `system_kw`. On a tie the earlier (smaller)
/// entry wins. An empty list falls back to rounding `system_kw`.
///
/// # Examples
///
/// ```
/// use power_advisor::solar::snap_to_standard_size;
///
/// assert_eq!(snap_to_standard_size(6.0, &[3, 5, 7, 10]), 5);
/// assert_eq!(snap_to_standard_size(6.5, &[3, 5, 7, 10]), 7);
/// ```
pub fn snap_to_standard_size(system_kw: f64, sizes: &[u32]) -> u32 {
    let distance = |size: u32| (f64::from(size) - system_kw).abs();
    sizes
        .iter()
        .copied()
        .reduce(|prev, curr| if distance(curr) < distance(prev) { curr } else { prev })
        .unwrap_or_else(|| system_kw.round() as u32)
}

/// Bill savings of a `system_kw` array, capped at a fraction of the bill.
pub fn calculate_savings(system_kw: u32, monthly_bill: f64, params: &SolarParams) -> Savings {
    let generated_units = f64::from(system_kw) * params.units_per_kw_per_month;
    let monthly = (generated_units * params.rate_per_unit)
        .min(monthly_bill * params.max_savings_fraction)
        .max(0.0);
    Savings {
        monthly: monthly.round() as u64,
        annual: (monthly * 12.0).round() as u64,
    }
}

/// Installed cost of a `system_kw` array (currency).
pub fn system_cost(system_kw: u32, params: &SolarParams) -> u64 {
    (f64::from(system_kw) * params.cost_per_kw).round() as u64
}

/// Years of savings needed to cover the cost, rounded to one decimal.
///
/// Returns `None` when `annual_savings` is zero.
pub fn payback_years(system_kw: u32, annual_savings: u64, params: &SolarParams) -> Option<f64> {
    if annual_savings == 0 {
        return None;
    }
    let years = system_cost(system_kw, params) as f64 / annual_savings as f64;
    Some((years * 10.0).round() / 10.0)
}

/// Computes the full solar recommendation.
///
/// The roof takes precedence over the goal: if the goal-derived size does
/// not fit, the system is downsized to what the roof holds.
pub fn recommend(
    installation: InstallationType,
    monthly_bill: f64,
    roof_space: f64,
    goal: SolarGoal,
    params: &SolarParams,
) -> SolarRecommendation {
    let monthly_units = estimate_monthly_units(monthly_bill, params);
    let goal_kw = goal_system_size(monthly_units, goal, installation, params);

    let roof_space_needed = roof_space_required(goal_kw, params);
    let roof_ok = is_roof_sufficient(goal_kw, roof_space, params);
    let fitted_kw = if roof_ok {
        goal_kw
    } else {
        roof_limited_size(roof_space, params)
    };

    let system_kw = snap_to_standard_size(fitted_kw, standard_sizes(installation, params));
    let savings = calculate_savings(system_kw, monthly_bill, params);
    let estimated_cost = system_cost(system_kw, params);
    let payback = payback_years(system_kw, savings.annual, params);

    debug!(
        ?installation,
        ?goal,
        monthly_units,
        goal_kw,
        fitted_kw,
        system_kw,
        roof_ok,
        "solar sizing"
    );

    let explanation = explain(
        monthly_bill,
        monthly_units,
        system_kw,
        roof_space,
        roof_ok,
        savings.monthly,
        payback,
    );

    SolarRecommendation {
        installation_type: installation,
        goal,
        monthly_bill,
        roof_space,
        estimated_monthly_units: monthly_units,
        system_size_kw: system_kw,
        system_type: installation.system_type(),
        panel_count: system_kw * params.panels_per_kw,
        estimated_monthly_savings: savings.monthly,
        estimated_annual_savings: savings.annual,
        estimated_cost,
        payback_years: payback,
        roof_space_needed,
        is_roof_sufficient: roof_ok,
        explanation,
    }
}

fn explain(
    monthly_bill: f64,
    monthly_units: u64,
    system_kw: u32,
    roof_space: f64,
    roof_ok: bool,
    monthly_savings: u64,
    payback: Option<f64>,
) -> String {
    let mut text = format!(
        "Based on your monthly bill of ₹{} (approx. {monthly_units} units), ",
        format_inr(monthly_bill)
    );
    if roof_ok {
        text.push_str(&format!("we recommend a {system_kw}kW system. "));
    } else {
        text.push_str(&format!(
            "we recommend a {system_kw}kW system optimized for your {roof_space} sq.ft roof space. "
        ));
    }

    let pct = if monthly_bill > 0.0 {
        (monthly_savings as f64 / monthly_bill * 100.0).round() as u64
    } else {
        0
    };
    match payback {
        Some(years) => text.push_str(&format!(
            "This system will reduce your electricity bills by approximately {pct}% and pay for \
             itself in about {years} years."
        )),
        None => text.push_str(&format!(
            "This system will reduce your electricity bills by approximately {pct}% but will not \
             pay for itself at the current bill."
        )),
    }
    text
}

impl fmt::Display for SolarRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payback = self
            .payback_years
            .map_or_else(|| "n/a".to_string(), |y| format!("{y:.1} yr"));
        write!(
            f,
            "{} | {}kW ({} panels) | save ₹{}/mo | cost ₹{} | payback {} | roof ok={}",
            self.installation_type,
            self.system_size_kw,
            self.panel_count,
            format_inr(self.estimated_monthly_savings as f64),
            format_inr(self.estimated_cost as f64),
            payback,
            self.is_roof_sufficient,
        )
    }
}

//! Calculator requests as they arrive from a form, the CLI, or the API.
//!
//! Requests are validated here so the calculators can assume clean input.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::battery::{self, BatteryRecommendation};
use crate::config::AdvisorConfig;
use crate::error::{InputError, require_non_negative, require_positive};
use crate::load::{ApplianceSelection, CustomAppliance};
use crate::solar::{self, InstallationType, SolarGoal, SolarRecommendation};

/// Bounds and step of a form slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Backup duration slider (h).
pub const BACKUP_HOURS: SliderRange = SliderRange {
    min: 2.0,
    max: 10.0,
    step: 0.5,
};

/// Monthly bill slider (currency).
pub const MONTHLY_BILL: SliderRange = SliderRange {
    min: 2000.0,
    max: 50_000.0,
    step: 500.0,
};

/// Roof space slider (sq ft).
pub const ROOF_SPACE: SliderRange = SliderRange {
    min: 100.0,
    max: 2000.0,
    step: 50.0,
};

fn default_backup_hours() -> f64 {
    4.0
}

/// Inputs of the battery/inverter calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatteryRequest {
    #[serde(default)]
    pub appliances: ApplianceSelection,
    #[serde(default = "default_backup_hours")]
    pub backup_hours: f64,
    #[serde(default)]
    pub custom_appliances: Vec<CustomAppliance>,
}

impl Default for BatteryRequest {
    fn default() -> Self {
        Self {
            appliances: ApplianceSelection::default(),
            backup_hours: default_backup_hours(),
            custom_appliances: Vec::new(),
        }
    }
}

impl BatteryRequest {
    /// Checks numeric fields. Values outside the form slider are accepted
    /// but logged.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotPositive`] if `backup_hours` is not positive.
    pub fn validate(&self) -> Result<(), InputError> {
        require_positive("backup_hours", self.backup_hours)?;
        if !BACKUP_HOURS.contains(self.backup_hours) {
            warn!(
                backup_hours = self.backup_hours,
                "backup duration outside the {}–{} h range offered in store",
                BACKUP_HOURS.min,
                BACKUP_HOURS.max
            );
        }
        Ok(())
    }

    /// Validates and runs the battery/inverter calculator.
    ///
    /// # Errors
    ///
    /// Returns the validation error, if any.
    pub fn recommend(&self, config: &AdvisorConfig) -> Result<BatteryRecommendation, InputError> {
        self.validate()?;
        Ok(battery::recommend(
            &self.appliances,
            self.backup_hours,
            &self.custom_appliances,
            &config.battery,
        ))
    }
}

/// Inputs of the solar calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarRequest {
    pub installation_type: InstallationType,
    pub monthly_bill: f64,
    pub roof_space: f64,
    pub goal: SolarGoal,
}

impl Default for SolarRequest {
    fn default() -> Self {
        Self {
            installation_type: InstallationType::Residential,
            monthly_bill: 5000.0,
            roof_space: 500.0,
            goal: SolarGoal::ReduceBills,
        }
    }
}

impl SolarRequest {
    /// Checks numeric fields. Values outside the form sliders are accepted
    /// but logged.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for a negative bill or non-positive roof space.
    pub fn validate(&self) -> Result<(), InputError> {
        require_non_negative("monthly_bill", self.monthly_bill)?;
        require_positive("roof_space", self.roof_space)?;
        if !MONTHLY_BILL.contains(self.monthly_bill) {
            warn!(monthly_bill = self.monthly_bill, "monthly bill outside slider range");
        }
        if !ROOF_SPACE.contains(self.roof_space) {
            warn!(roof_space = self.roof_space, "roof space outside slider range");
        }
        Ok(())
    }

    /// Validates and runs the solar calculator.
    ///
    /// # Errors
    ///
    /// Returns the validation error, if any.
    pub fn recommend(&self, config: &AdvisorConfig) -> Result<SolarRecommendation, InputError> {
        self.validate()?;
        Ok(solar::recommend(
            self.installation_type,
            self.monthly_bill,
            self.roof_space,
            self.goal,
            &config.solar,
        ))
    }
}

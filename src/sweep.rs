//! Recomputes a recommendation across a slider's range.
//!
//! The storefront recalculates on every slider movement; a sweep produces the
//! same sequence of results in one pass, e.g. for a printed price sheet.

use crate::battery::{self, BatteryRecommendation};
use crate::config::{BatteryParams, SolarParams};
use crate::error::{InputError, require_positive};
use crate::load::{ApplianceSelection, CustomAppliance};
use crate::request::SliderRange;
use crate::solar::{self, InstallationType, SolarGoal, SolarRecommendation};

/// Most points a single sweep may produce.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Evenly spaced values from `range.min` to `range.max` inclusive.
///
/// # Errors
///
/// Returns [`InputError::InvalidRange`] if the step is not positive, the
/// bounds are not finite, `min > max`, or the range would yield more than
/// [`MAX_SWEEP_POINTS`] values.
pub fn steps(range: SliderRange) -> Result<Vec<f64>, InputError> {
    let SliderRange { min, max, step } = range;
    if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 || min > max {
        return Err(InputError::InvalidRange {
            from: min,
            to: max,
            step,
        });
    }
    // Index-based so accumulated float error never drops the last point.
    let intervals = ((max - min) / step + 1e-9).floor();
    if intervals >= MAX_SWEEP_POINTS as f64 {
        return Err(InputError::InvalidRange {
            from: min,
            to: max,
            step,
        });
    }
    let count = intervals as usize;
    Ok((0..=count).map(|i| min + step * i as f64).collect())
}

/// Battery recommendation at each backup duration in `range`.
///
/// # Errors
///
/// Returns [`InputError::InvalidRange`] for a malformed range or
/// [`InputError::NotPositive`] if the range includes a non-positive duration.
pub fn backup_hours_sweep(
    selection: &ApplianceSelection,
    custom: &[CustomAppliance],
    range: SliderRange,
    params: &BatteryParams,
) -> Result<Vec<BatteryRecommendation>, InputError> {
    if range.min <= 0.0 {
        return Err(InputError::NotPositive {
            field: "backup_hours",
            value: range.min,
        });
    }
    Ok(steps(range)?
        .into_iter()
        .map(|hours| battery::recommend(selection, hours, custom, params))
        .collect())
}

/// Solar recommendation at each monthly bill in `range`.
///
/// # Errors
///
/// Returns [`InputError::InvalidRange`] for a malformed range or
/// [`InputError::NegativeOrNonFinite`] if the range includes a negative bill,
/// or [`InputError::NotPositive`] for a non-positive roof space.
pub fn monthly_bill_sweep(
    installation: InstallationType,
    roof_space: f64,
    goal: SolarGoal,
    range: SliderRange,
    params: &SolarParams,
) -> Result<Vec<SolarRecommendation>, InputError> {
    require_positive("roof_space", roof_space)?;
    if range.min < 0.0 {
        return Err(InputError::NegativeOrNonFinite {
            field: "monthly_bill",
            value: range.min,
        });
    }
    Ok(steps(range)?
        .into_iter()
        .map(|bill| solar::recommend(installation, bill, roof_space, goal, params))
        .collect())
}

//! Errors raised while validating user input before it reaches a calculator.

use thiserror::Error;

/// Rejected user input. Messages are meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter appliance name")]
    EmptyApplianceName,
    #[error("Please enter a valid wattage")]
    InvalidWattage,
    #[error("Please enter a valid quantity")]
    InvalidQuantity,
    #[error("unknown appliance \"{0}\"")]
    UnknownAppliance(String),
    #[error("{field} must be a finite number >= 0, got {value}")]
    NegativeOrNonFinite { field: &'static str, value: f64 },
    #[error("{field} must be > 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("invalid range {from}..={to} step {step}")]
    InvalidRange { from: f64, to: f64, step: f64 },
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NotPositive { field, value })
    }
}

/// Checks that `value` is finite and not negative.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InputError::NegativeOrNonFinite { field, value })
    }
}

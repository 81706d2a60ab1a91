//! API response types.

use serde::Serialize;

use crate::battery::BatteryRecommendation;
use crate::quote::QuoteView;
use crate::solar::SolarRecommendation;

/// `POST /battery` response body.
#[derive(Debug, Serialize)]
pub struct BatteryResponse {
    pub recommendation: BatteryRecommendation,
    /// Absent when nothing was selected.
    pub quote: Option<QuoteView>,
}

/// `POST /solar` response body.
#[derive(Debug, Serialize)]
pub struct SolarResponse {
    pub recommendation: SolarRecommendation,
    pub quote: QuoteView,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

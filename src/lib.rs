//! Battery/inverter and rooftop solar sizing for a retail storefront.

/// HTTP API over the calculators (feature `api`).
#[cfg(feature = "api")]
pub mod api;
pub mod battery;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
/// CSV export.
pub mod io;
pub mod load;
pub mod quote;
pub mod reporting;
pub mod request;
pub mod solar;
pub mod sweep;

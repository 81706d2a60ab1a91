//! REST API over the calculators.
//!
//! Provides three endpoints:
//! - `GET /appliances` — the built-in appliance list
//! - `POST /battery` — battery/inverter recommendation and quote
//! - `POST /solar` — solar recommendation and quote

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::config::AdvisorConfig;

pub use types::{BatteryResponse, ErrorResponse, SolarResponse};

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`. Every request is an
/// independent pure computation, so no locks are needed.
pub struct AppState {
    /// Sizing constants and quote settings.
    pub config: AdvisorConfig,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/appliances", get(handlers::get_appliances))
        .route("/battery", post(handlers::post_battery))
        .route("/solar", post(handlers::post_solar))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}

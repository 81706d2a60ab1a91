//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::debug;

use super::AppState;
use super::types::{BatteryResponse, ErrorResponse, SolarResponse};
use crate::catalog::{APPLIANCES, Appliance};
use crate::quote::{battery_quote, solar_quote};
use crate::request::{BatteryRequest, SolarRequest};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: impl ToString) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

/// Returns the built-in appliance list.
///
/// `GET /appliances` → 200 + `Vec<Appliance>` JSON
pub async fn get_appliances() -> Json<&'static [Appliance]> {
    Json(APPLIANCES)
}

/// Computes a battery/inverter recommendation.
///
/// `POST /battery` → 200 + `BatteryResponse` JSON
/// Malformed body, unknown appliance, or invalid duration → 400 + `ErrorResponse`
pub async fn post_battery(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatteryRequest>, JsonRejection>,
) -> Result<Json<BatteryResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| bad_request(e.body_text()))?;
    let recommendation = req.recommend(&state.config).map_err(bad_request)?;
    debug!(band = ?recommendation.band, "served battery recommendation");

    let quote = battery_quote(
        &req.appliances,
        &req.custom_appliances,
        &recommendation,
        &state.config.quote.recipient,
    )
    .map(Into::into);

    Ok(Json(BatteryResponse {
        recommendation,
        quote,
    }))
}

/// Computes a solar recommendation.
///
/// `POST /solar` → 200 + `SolarResponse` JSON
/// Malformed body or negative bill/roof → 400 + `ErrorResponse`
pub async fn post_solar(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SolarRequest>, JsonRejection>,
) -> Result<Json<SolarResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| bad_request(e.body_text()))?;
    let recommendation = req.recommend(&state.config).map_err(bad_request)?;
    debug!(kw = recommendation.system_size_kw, "served solar recommendation");

    let quote = solar_quote(&recommendation, &state.config.quote.recipient).into();
    Ok(Json(SolarResponse {
        recommendation,
        quote,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use axum::http::header::CONTENT_TYPE;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::AdvisorConfig;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: AdvisorConfig::default(),
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn appliances_returns_catalog() {
        let app = router(make_test_state());
        let req = Request::builder()
            .uri("/appliances")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.len(), 8);
        assert_eq!(json[0]["id"], "lights");
        assert_eq!(json[0]["wattage"], 60);
    }

    #[tokio::test]
    async fn battery_returns_recommendation_and_quote() {
        let app = router(make_test_state());
        let req = post_json(
            "/battery",
            r#"{"appliances": {"lights": 4, "fans": 2}, "backup_hours": 4}"#,
        );
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["recommendation"]["total_load_w"], 390);
        assert_eq!(json["recommendation"]["required_battery_ah"], 163);
        assert_eq!(json["recommendation"]["band"], "mid");
        assert!(json["quote"]["mailto"].as_str().is_some());
    }

    #[tokio::test]
    async fn empty_battery_request_has_no_quote() {
        let app = router(make_test_state());
        let resp = app.oneshot(post_json("/battery", "{}")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["recommendation"]["band"], "no_load");
        assert!(json["quote"].is_null());
    }

    #[tokio::test]
    async fn unknown_appliance_returns_400() {
        let app = router(make_test_state());
        let resp = app
            .oneshot(post_json("/battery", r#"{"appliances": {"heater": 1}}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn zero_backup_hours_returns_400() {
        let app = router(make_test_state());
        let resp = app
            .oneshot(post_json(
                "/battery",
                r#"{"appliances": {"tv": 1}, "backup_hours": 0}"#,
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn solar_returns_recommendation() {
        let app = router(make_test_state());
        let req = post_json(
            "/solar",
            r#"{"installation_type": "residential", "monthly_bill": 5000,
                "roof_space": 500, "goal": "reduce_bills"}"#,
        );
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["recommendation"]["system_size_kw"], 5);
        assert_eq!(json["recommendation"]["payback_years"], 6.9);
        assert_eq!(
            json["quote"]["subject"],
            "Solar Installation Quote: 5kW System"
        );
    }

    #[tokio::test]
    async fn solar_negative_bill_returns_400() {
        let app = router(make_test_state());
        let req = post_json(
            "/solar",
            r#"{"installation_type": "commercial", "monthly_bill": -10,
                "roof_space": 500, "goal": "backup"}"#,
        );
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

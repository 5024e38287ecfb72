// HTTP handlers for the summary service

use axum::{
    body::Bytes,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::brand::{render_summary, FormState, SummaryResponse};
use crate::config::constants::BRAND_ROUTE;

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
}

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Build the router without any layers (see `BrandServer::serve`)
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route(BRAND_ROUTE, post(handle_generate))
}

/// POST /brand
///
/// The body is read as JSON whatever its content type. An empty body or a
/// non-object reads as an empty form, and fields are not validated: anything
/// missing renders as an empty string. Only unparseable JSON is rejected.
pub async fn handle_generate(
    body: Bytes,
) -> Result<Json<SummaryResponse>, (StatusCode, String)> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "Rejecting malformed brand request");
            (StatusCode::BAD_REQUEST, format!("Malformed JSON body: {e}"))
        })?
    };

    let form = FormState::from_json(&body);
    tracing::info!(complete = form.is_complete(), "Generating brand summary");
    Ok(Json(SummaryResponse {
        result: render_summary(&form),
    }))
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
    })
}

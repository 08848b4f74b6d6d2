use std::time::SystemTime;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check() -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "login": "operational",
        },
        "timestamp": humantime::format_rfc3339(SystemTime::now()).to_string(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness check
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness check
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}

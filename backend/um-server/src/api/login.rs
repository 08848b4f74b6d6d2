use crate::{AppState, JsonBody};

use um_core::{Credentials, LoginResponse};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::info;

/// POST /api/login - Check a credential pair
///
/// 200 `{"success": true}` on a match, 401 `{"success": false}` otherwise.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Response {
    let success = state
        .auth
        .accepts(&credentials.username, &credentials.password);

    let status = if success {
        info!("Login accepted for '{}'", credentials.username);
        StatusCode::OK
    } else {
        info!("Login rejected for '{}'", credentials.username);
        StatusCode::UNAUTHORIZED
    };

    (status, Json(LoginResponse { success })).into_response()
}

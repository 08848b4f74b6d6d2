#![allow(dead_code)]

//! Test infrastructure for um-server API tests

use um_config::AuthConfig;
use um_server::AppState;

use axum::{body::Body, http::Request};

/// AppState accepting the default admin/admin123 pair
pub fn create_test_app_state() -> AppState {
    AppState::new(AuthConfig::default())
}

/// AppState accepting a custom pair
pub fn create_app_state_with(username: &str, password: &str) -> AppState {
    AppState::new(AuthConfig {
        username: username.to_string(),
        password: password.to_string(),
    })
}

pub fn login_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

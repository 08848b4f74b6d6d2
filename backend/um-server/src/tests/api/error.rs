use crate::ApiError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_invalid_json_returns_400_with_json_body() {
    let error = ApiError::invalid_json("expected value at line 1 column 1");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INVALID_JSON");
    assert_eq!(
        json["error"]["message"],
        "expected value at line 1 column 1"
    );
}

#[test]
fn test_display_includes_location() {
    let error = ApiError::invalid_json("bad");

    assert!(error.to_string().contains("error.rs"));
}

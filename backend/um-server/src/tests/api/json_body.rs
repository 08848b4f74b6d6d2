use crate::JsonBody;

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Payload {
    value: u32,
}

fn request(content_type: Option<&str>, body: &'static str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn given_valid_json_when_extracted_then_value() {
    let req = request(Some("application/json"), r#"{"value": 7}"#);

    let JsonBody(payload) = JsonBody::<Payload>::from_request(req, &()).await.unwrap();

    assert_eq!(payload.value, 7);
}

#[tokio::test]
async fn given_syntax_error_when_extracted_then_400() {
    let req = request(Some("application/json"), "{value");

    let rejection = JsonBody::<Payload>::from_request(req, &())
        .await
        .err()
        .unwrap();

    assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_wrong_type_when_extracted_then_400_not_422() {
    let req = request(Some("application/json"), r#"{"value": "seven"}"#);

    let rejection = JsonBody::<Payload>::from_request(req, &())
        .await
        .err()
        .unwrap();

    assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_missing_content_type_when_extracted_then_400_not_415() {
    let req = request(None, r#"{"value": 7}"#);

    let rejection = JsonBody::<Payload>::from_request(req, &())
        .await
        .err()
        .unwrap();

    assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
}

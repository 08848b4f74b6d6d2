//! JSON body extractor with API-shaped rejections

use crate::ApiError;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Like [`Json`], but every rejection becomes a 400 [`ApiError`].
///
/// Axum answers a missing content type with 415 and a type mismatch with
/// 422; the login endpoint reports all of them as a bad request.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(ApiError::invalid_json(rejection.body_text())),
            }
        }
    }
}

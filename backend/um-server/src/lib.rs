pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    extractors::json_body::JsonBody,
    login::login,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;

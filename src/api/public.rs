//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

// Errors

pub const ERROR_BODY: &str = "Something went wrong";

pub struct ApiError(anyhow::Error);

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Details stay in the server log, upstream errors can carry
        // endpoint URLs
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, ERROR_BODY).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod query {
    pub use crate::api::routes::query::public::*;
}

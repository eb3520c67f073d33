use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// Errors a handler can hand back to the client
///
/// Every variant becomes a bare 500. The detail is logged and never written
/// to the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("Failed to parse form: {0}")]
    Form(#[from] serde_urlencoded::de::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

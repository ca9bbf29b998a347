//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::response::MessageBody;
use crate::store::StoreError;

/// Everything a product handler can fail with.
///
/// The `Display` text is exactly what the client receives as `message`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required creation field is absent or falsy, or the body is unreadable.
    #[error("Some data is missing.")]
    MissingData,

    /// The id is unknown or not a number.
    #[error("Product not found with the ID sent.")]
    ProductNotFound,

    /// Update target is unknown, or the patch was rejected.
    #[error("Product not found with the ID sent or the information is invalid.")]
    UpdateRejected,

    #[error("Invalid query: {0}")]
    BadQuery(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingData
            | ApiError::ProductNotFound
            | ApiError::UpdateRejected
            | ApiError::BadQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Store(e) => tracing::error!(error = ?e, "Product store failure"),
            other => tracing::debug!(status = %status, reason = %other, "Rejected request"),
        }

        let body = MessageBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

//! Request handling.
//!
//! # Responsibilities
//! - Assign every request an `x-request-id` (UUID v4) unless the client sent one
//! - Echo the id on the response
//! - Open a tracing span per request carrying method, URI and id
//! - Decode product bodies sent either as JSON or as an HTML form
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request as AxumRequest,
    },
    http::{header, HeaderMap, HeaderName, Request},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::Span;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that assigns a request id before anything else sees the request.
pub fn set_request_id() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID), MakeRequestUuid)
}

/// Layer that copies the request id onto the response.
pub fn propagate_request_id() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(X_REQUEST_ID))
}

/// Read the id a request was tagged with.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span factory for `TraceLayer`.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id(request),
    )
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body extractor that picks [`Form`] or [`Json`] from the `Content-Type`.
///
/// Anything that is not form-encoded goes through the JSON path, so a
/// missing content type is rejected the way [`Json`] rejects it.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

/// Why a [`JsonOrForm`] body could not be read.
#[derive(Debug, Error)]
pub enum BodyRejection {
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Form(#[from] FormRejection),
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        match self {
            BodyRejection::Json(e) => e.into_response(),
            BodyRejection::Form(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: AxumRequest, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

//! Request identification.
//!
//! # Responsibilities
//! - Name the request ID header
//! - Build the per-request tracing span carrying the ID
//!
//! # Design Decisions
//! - IDs are UUID v4, generated by `SetRequestIdLayer` when the client sent none
//! - The same header is echoed on the response by `PropagateRequestIdLayer`

use axum::http::{HeaderName, Request};
use tracing::Span;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Value of the request ID header, or `"unknown"`.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Span for one HTTP request, used by the trace layer.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request),
        method = %request.method(),
        path = %request.uri().path(),
    )
}

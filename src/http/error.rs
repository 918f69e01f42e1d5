//! Error responses.
//!
//! Every failure leaves the service as a JSON body of the form
//! `{"message": "..."}` with a status chosen by the variant. Middleware
//! errors (request timeout) are folded in by [`handle_layer_error`].

use axum::{
    extract::rejection::JsonRejection,
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::encoding::{DispatchError, EncodeError};
use crate::remote::RemoteError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("album not found")]
    NotFound,

    #[error("invalid album payload: {0}")]
    Decode(String),

    #[error("request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("remote backend unavailable: {0}")]
    RemoteUnavailable(#[from] RemoteError),

    #[error("failed to encode response: {0}")]
    Encode(#[from] EncodeError),

    #[error("request timed out")]
    Timeout,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::RemoteUnavailable(_) | ApiError::Encode(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Encode(e) => ApiError::Encode(e),
            DispatchError::Remote(e) => ApiError::RemoteUnavailable(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::Decode(rejection.body_text())
        }
    }
}

/// Error handler for the fallible middleware stack.
pub async fn handle_layer_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Format;

    #[test]
    fn test_not_found_message_is_fixed() {
        assert_eq!(ApiError::NotFound.to_string(), "album not found");
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_statuses() {
        assert_eq!(ApiError::Decode("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Encode(EncodeError::Unsupported(Format::Xml)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let remote = RemoteError::InvalidAddress {
            address: "x".into(),
            reason: "y".into(),
        };
        assert_eq!(
            ApiError::from(DispatchError::Remote(remote)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_elapsed_maps_to_timeout() {
        let err = handle_layer_error(Box::new(tower::timeout::error::Elapsed::new())).await;
        assert!(matches!(err, ApiError::Timeout));
        assert_eq!(err.status(), StatusCode::REQUEST_TIMEOUT);

        let err = handle_layer_error("boom".into()).await;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal error: boom");
    }
}

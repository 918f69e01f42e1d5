//! Encoded bodies as HTTP responses.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::encoding::Encoded;

impl IntoResponse for Encoded {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

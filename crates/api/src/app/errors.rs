use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::app::dto::{ErrorResponse, PRODUCT_NOT_FOUND};

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// 404 for any `/products/{id}` that does not name a product, including
/// segments that are not positive integers.
pub fn product_not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND)
}

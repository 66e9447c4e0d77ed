use axum::{http::StatusCode, response::Response, Json};

use crate::app::dto::{WelcomeResponse, METHOD_NOT_ALLOWED, ROUTE_NOT_FOUND};
use crate::app::errors;

pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn not_found() -> Response {
    errors::json_error(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> Response {
    errors::json_error(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}

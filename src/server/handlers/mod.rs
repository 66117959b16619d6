// src/server/handlers/mod.rs
//! HTTP request handlers for the cookbook server

pub mod entry;
pub mod parse;
pub mod summary;

use crate::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Every domain failure is a client error
pub(crate) fn error_response(error: &Error) -> Response {
    let body = serde_json::json!({
        "error": error.kind(),
        "message": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

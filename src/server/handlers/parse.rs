// src/server/handlers/parse.rs
//! Name normalization handler

use crate::name::parse_handwriting;
use crate::server::handlers::error_response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Request body for name normalization
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Free-form name as written
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    /// Normalized display name
    pub msg: String,
}

/// Normalize a hand-written name
///
/// POST /parse
pub async fn parse_name(Json(request): Json<ParseRequest>) -> Response {
    match parse_handwriting(&request.input) {
        Ok(msg) => (StatusCode::OK, Json(ParseResponse { msg })).into_response(),
        Err(e) => error_response(&e),
    }
}

// src/server/handlers/entry.rs
//! Item registration handler

use crate::server::handlers::error_response;
use crate::server::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Register an ingredient or recipe
///
/// POST /entry
///
/// The write lock is held across validation and insertion.
pub async fn create_entry(
    State(state): State<Arc<RwLock<ServerState>>>,
    Json(payload): Json<Value>,
) -> Response {
    let mut state = state.write().await;
    let result = state.catalog.register_json(&payload);

    if state.config.enable_audit_log {
        match &result {
            Ok(()) => info!("POST /entry accepted ({} items)", state.catalog.len()),
            Err(e) => info!("POST /entry rejected: {}", e),
        }
    }

    match result {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({}))).into_response(),
        Err(e) => error_response(&e),
    }
}

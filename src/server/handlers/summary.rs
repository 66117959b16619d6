// src/server/handlers/summary.rs
//! Recipe summary handler

use crate::server::handlers::error_response;
use crate::server::ServerState;
use crate::Resolver;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Query parameters for a summary request
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// Expand a recipe into its ingredients and total cook time
///
/// GET /summary?name=
pub async fn get_summary(
    State(state): State<Arc<RwLock<ServerState>>>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    // A missing name is reported as an unknown one
    let name = query.name.unwrap_or_default();

    let state = state.read().await;
    let result = Resolver::new(&state.catalog).summarize(&name);

    if state.config.enable_audit_log {
        match &result {
            Ok(summary) => info!("GET /summary '{}': cook time {}", name, summary.cook_time),
            Err(e) => info!("GET /summary '{}' rejected: {}", name, e),
        }
    }

    match result {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response(&e),
    }
}

// src/server/mod.rs
//! Cookbook HTTP server
//!
//! Exposes the catalog over HTTP:
//! - `POST /entry` registers an ingredient or recipe
//! - `GET /summary?name=` expands a recipe into its flat ingredient list
//! - `POST /parse` normalizes a hand-written name
//!
//! The catalog lives inside [`ServerState`] behind a single `RwLock`.
//! Registration holds the write lock for the whole validate-and-insert step,
//! so summaries never observe a half-registered item.

pub mod config;
mod handlers;
mod routes;

pub use config::CookbookConfig;
pub use routes::create_router;

use crate::recipe::Catalog;
use anyhow::{Context, Result};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Largest accepted request body in bytes
    pub max_body_size: usize,
    /// Log the outcome of every request
    pub enable_audit_log: bool,
    /// CORS allowed origins (empty = any origin)
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            max_body_size: 64 * 1024,
            enable_audit_log: true,
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// Shared server state
#[derive(Debug)]
pub struct ServerState {
    pub config: ServerConfig,
    /// Every item registered since start-up
    pub catalog: Catalog,
}

impl ServerState {
    /// State with an empty catalog
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
        }
    }
}

/// Start the cookbook server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting cookbook server on {}", config.bind_addr);
    tracing::info!("Max request body: {} bytes", config.max_body_size);
    if config.cors_allowed_origins.is_empty() {
        tracing::info!("CORS: any origin");
    } else {
        tracing::info!("CORS: {}", config.cors_allowed_origins.join(", "));
    }

    let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
    let app = create_router(&config, state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Cookbook is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}

// src/server/config.rs
//! Configuration file parsing for the cookbook server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address, request body limit, audit logging
//! - [security] - CORS origins
//!
//! Every field has a default, so an empty file is a valid configuration.

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct CookbookConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Security settings
    #[serde(default)]
    pub security: SecuritySection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Largest accepted request body (e.g., "64KB", "1MB")
    #[serde(default = "default_max_body_size")]
    pub max_body_size: String,

    /// Log the outcome of every request
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_size: default_max_body_size(),
            audit_log: true,
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_max_body_size() -> String {
    "64KB".to_string()
}

fn default_true() -> bool {
    true
}

/// Security configuration section
#[derive(Debug, Default, Deserialize)]
pub struct SecuritySection {
    /// Allowed CORS origins (empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl CookbookConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CookbookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        let max_body = parse_size(&self.server.max_body_size).with_context(|| {
            format!("Invalid server.max_body_size: {}", self.server.max_body_size)
        })?;
        if max_body == 0 {
            anyhow::bail!("server.max_body_size must be greater than zero");
        }

        for origin in &self.security.cors_origins {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid security.cors_origins entry: {}", origin))?;
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;
        let max_body_size = usize::try_from(parse_size(&self.server.max_body_size)?)
            .context("server.max_body_size does not fit in memory")?;

        Ok(ServerConfig {
            bind_addr,
            max_body_size,
            enable_audit_log: self.server.audit_log,
            cors_allowed_origins: self.security.cors_origins.clone(),
        })
    }
}

/// Parse a human-readable size string (e.g., "64KB", "1MB", "512")
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(num) = s.strip_suffix("GB") {
        (num, 1024u64 * 1024 * 1024)
    } else if let Some(num) = s.strip_suffix("MB") {
        (num, 1024u64 * 1024)
    } else if let Some(num) = s.strip_suffix("KB") {
        (num, 1024u64)
    } else if let Some(num) = s.strip_suffix('B') {
        (num, 1u64)
    } else {
        // Assume bytes
        (s.as_str(), 1u64)
    };

    let num: f64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid size number: {}", num_str))?;
    if !num.is_finite() || num < 0.0 {
        anyhow::bail!("Size must be a non-negative number: {}", s);
    }

    Ok((num * multiplier as f64) as u64)
}

// src/commands/serve.rs

//! Server command - run the cookbook HTTP service

use anyhow::{Context, Result};
use cookbook::server::{run_server, CookbookConfig};
use std::path::Path;
use tracing::info;

/// Start the HTTP server
///
/// # Arguments
/// * `config_path` - Optional TOML configuration file
/// * `bind` - Bind address overriding the configuration
pub fn cmd_serve(config_path: Option<&str>, bind: Option<&str>) -> Result<()> {
    let file_config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path);
            CookbookConfig::load(Path::new(path))?
        }
        None => CookbookConfig::default(),
    };

    let mut config = file_config.to_server_config()?;
    if let Some(bind) = bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    rt.block_on(run_server(config))
}

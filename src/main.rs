// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { config, bind } => {
            commands::cmd_serve(config.as_deref(), bind.as_deref())
        }
        Commands::Parse { input } => commands::cmd_parse(&input),
        Commands::Summarize { entries, name } => commands::cmd_summarize(&entries, &name),
        Commands::Check { entries } => commands::cmd_check(&entries),
    }
}

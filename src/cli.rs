// src/cli.rs
//! CLI definitions for the cookbook service
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author = "Cookbook Contributors")]
#[command(version)]
#[command(about = "Recipe catalog with ingredient and cook-time summaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    ///
    /// The catalog starts empty and lives for as long as the process.
    #[cfg(feature = "server")]
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Address to bind to (host:port), overrides the config file
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Normalize a hand-written recipe name
    Parse {
        /// Name as written
        input: String,
    },

    /// Print the summary of a recipe from a file of entries
    Summarize {
        /// JSON file holding an array of entries, registered in order
        #[arg(short, long)]
        entries: String,

        /// Recipe to summarize
        name: String,
    },

    /// Validate a file of entries and report every rejection
    Check {
        /// JSON file holding an array of entries, registered in order
        #[arg(short, long)]
        entries: String,
    },
}

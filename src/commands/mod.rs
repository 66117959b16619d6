// src/commands/mod.rs
//! Command handlers for the cookbook CLI

mod entries;
mod name;
#[cfg(feature = "server")]
mod serve;

pub use entries::{cmd_check, cmd_summarize};
pub use name::cmd_parse;
#[cfg(feature = "server")]
pub use serve::cmd_serve;

// src/commands/name.rs

//! Name normalization command

use anyhow::Result;

/// Print the normalized form of a hand-written name
pub fn cmd_parse(input: &str) -> Result<()> {
    let name = cookbook::parse_handwriting(input)?;
    println!("{}", name);
    Ok(())
}

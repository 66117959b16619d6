// src/commands/entries.rs

//! Offline commands over a file of catalog entries
//!
//! An entries file is a JSON array of registration payloads, the same shape
//! the server accepts on `POST /entry`.

use anyhow::{Context, Result};
use cookbook::{Catalog, Resolver};
use serde_json::Value;
use std::path::Path;
use tracing::info;

fn read_entries(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read entries file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Entries file is not a JSON array: {}", path.display()))
}

/// Register every entry in order, stopping at the first rejection
fn load_catalog(path: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for (index, entry) in read_entries(path)?.iter().enumerate() {
        catalog
            .register_json(entry)
            .with_context(|| format!("Entry {} rejected", index))?;
    }
    info!("Loaded {} items from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Summarize a recipe defined in an entries file
pub fn cmd_summarize(entries_path: &str, name: &str) -> Result<()> {
    let catalog = load_catalog(Path::new(entries_path))?;
    let summary = Resolver::new(&catalog).summarize(name)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Register every entry in a file, reporting each rejection
pub fn cmd_check(entries_path: &str) -> Result<()> {
    let path = Path::new(entries_path);
    let entries = read_entries(path)?;

    let mut catalog = Catalog::new();
    let mut rejected = 0;
    for (index, entry) in entries.iter().enumerate() {
        if let Err(e) = catalog.register_json(entry) {
            println!("  [{}] {}", index, e);
            rejected += 1;
        }
    }

    println!(
        "{} entries, {} registered, {} rejected",
        entries.len(),
        catalog.len(),
        rejected
    );

    if rejected > 0 {
        anyhow::bail!("{} of {} entries rejected", rejected, entries.len());
    }
    println!("[OK] No issues found");
    Ok(())
}

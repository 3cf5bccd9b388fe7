//! List subcommand handler

use std::path::PathBuf;

use anyhow::Result;
use humansize::{format_size, DECIMAL};
use serde::Serialize;

use flick::{CacheEntry, Config};

use crate::commands::open_store;

/// JSON view of one cache entry.
#[derive(Serialize)]
struct EntryView {
    id: u32,
    path: String,
    size: u64,
    modified: Option<String>,
}

impl From<&CacheEntry> for EntryView {
    fn from(entry: &CacheEntry) -> Self {
        Self {
            id: entry.id,
            path: entry.path.display().to_string(),
            size: entry.size,
            modified: entry.modified.map(|t| t.to_rfc3339()),
        }
    }
}

/// List cached animations, as an aligned table or as JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, cache_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let store = open_store(config, cache_dir)?;
    let entries = store.entries()?;

    if json {
        let views: Vec<EntryView> = entries.iter().map(EntryView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No cached animations.");
        return Ok(());
    }

    println!("{:<8} {:>10}  {:<16}  {}", "ID", "SIZE", "MODIFIED", "FILE");
    for entry in &entries {
        let modified = entry
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {:>10}  {:<16}  {}",
            entry.id,
            format_size(entry.size, DECIMAL),
            modified,
            entry.path.display()
        );
    }
    Ok(())
}

//! Clean subcommand handler

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use flick::Config;

use crate::commands::open_store;

/// Remove cached animations.
///
/// With explicit ids each one is removed directly; with none, the whole
/// cache is cleared after a confirmation prompt (skipped by `--yes`).
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, cache_dir: Option<PathBuf>, ids: Vec<u32>, yes: bool) -> Result<()> {
    let store = open_store(config, cache_dir)?;

    if !ids.is_empty() {
        for id in ids {
            if store.remove(id)? {
                println!("Removed animation {}.", id);
            } else {
                println!("Animation {} was not cached.", id);
            }
        }
        return Ok(());
    }

    let entries = store.entries()?;
    if entries.is_empty() {
        println!("No cached animations.");
        return Ok(());
    }

    let message = format!("Remove all {} cached animation(s)?", entries.len());
    if !yes && !prompt_confirmation(&message)? {
        println!("No changes made.");
        return Ok(());
    }

    let removed = store.clear()?;
    println!("Removed {} cached animation(s).", removed);
    Ok(())
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!("Non-interactive mode: use --yes to remove without prompting");
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

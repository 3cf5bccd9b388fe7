//! Fetch subcommand handler

use std::path::PathBuf;

use anyhow::Result;
use humansize::{format_size, DECIMAL};
use tracing::warn;

use flick::Config;

use crate::commands::open_store;

/// Download an animation into the cache without playing it.
///
/// A source that does not extract cleanly is still cached (so it can be
/// inspected); the problem is reported as a warning rather than an error.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, cache_dir: Option<PathBuf>, id: u32, refresh: bool) -> Result<()> {
    let store = open_store(config, cache_dir)?;
    let source = flick::store::resolve(&store, &config.remote, id, refresh)?;
    let path = store.path_for(id);

    println!(
        "Cached animation {} at {} ({})",
        id,
        path.display(),
        format_size(source.len() as u64, DECIMAL)
    );

    match flick::extract::frames_with(&source, &config.extract.heuristic()) {
        Ok(frames) => {
            let (cols, rows) = frames.dimensions();
            println!("{} frames, up to {}x{} characters", frames.len(), cols, rows);
        }
        Err(err) => warn!(id, error = %err, "cached source is not playable"),
    }
    Ok(())
}

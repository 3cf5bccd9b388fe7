//! Binary-side command handlers.
//!
//! One module per subcommand; shared plumbing lives here.

pub mod clean;
pub mod config;
pub mod fetch;
pub mod list;
pub mod play;

use std::path::PathBuf;

use anyhow::Result;

use flick::{CacheStore, Config};

/// Open the cache store, honoring the `--cache-dir` flag first, then the
/// config file, then the platform default.
pub fn open_store(config: &Config, override_dir: Option<PathBuf>) -> Result<CacheStore> {
    let root = match override_dir.or_else(|| config.cache.dir.clone()) {
        Some(dir) => dir,
        None => CacheStore::default_root()?,
    };
    CacheStore::open(root)
}

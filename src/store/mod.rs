//! Animation source storage: local cache plus gallery fetch.
//!
//! The rest of the crate only ever sees raw source text; whether it came
//! from disk or from the network is decided here.

mod cache;
mod fetch;

pub use cache::{CacheEntry, CacheStore};
pub use fetch::fetch_source;

use anyhow::Result;
use tracing::debug;

use crate::config::RemoteConfig;

/// Resolve an animation id to raw source text.
///
/// A cache hit wins unless `refresh` forces a new download; downloads are
/// written through to the cache before returning.
pub fn resolve(store: &CacheStore, remote: &RemoteConfig, id: u32, refresh: bool) -> Result<String> {
    if !refresh {
        if let Some(source) = store.load(id)? {
            debug!(id, "cache hit");
            return Ok(source);
        }
        debug!(id, "cache miss");
    }

    let url = remote.url_for(id)?;
    let source = fetch_source(&url, remote.timeout())?;
    store.save(id, &source)?;
    Ok(source)
}

//! Flat-file cache of downloaded animation sources.
//!
//! Layout is one `<id>.txt` file per animation under a single root
//! directory. Files are the raw gallery response; extraction happens on
//! every play so heuristic changes apply to already-cached animations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::debug;

/// One cached animation source on disk.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Animation id (the file stem)
    pub id: u32,
    /// Full path of the cached file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Last modification time, when the filesystem reports one
    pub modified: Option<DateTime<Local>>,
}

/// Handle on the cache directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Open a cache rooted at `root`, creating the directory if needed.
    pub fn open(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create cache directory: {:?}", root))?;
        Ok(Self { root })
    }

    /// Platform default cache root.
    pub fn default_root() -> Result<PathBuf> {
        let base = dirs::cache_dir().context("Could not determine the cache directory")?;
        Ok(base.join("flick"))
    }

    /// Cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an animation id is cached at, whether or not it exists yet.
    pub fn path_for(&self, id: u32) -> PathBuf {
        self.root.join(format!("{id}.txt"))
    }

    /// Load a cached source, or None on a cache miss.
    pub fn load(&self, id: u32) -> Result<Option<String>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cached animation: {:?}", path))?;
        Ok(Some(source))
    }

    /// Write a source through to the cache, returning the file path.
    pub fn save(&self, id: u32, source: &str) -> Result<PathBuf> {
        let path = self.path_for(id);
        fs::write(&path, source)
            .with_context(|| format!("Failed to write cached animation: {:?}", path))?;
        debug!(id, bytes = source.len(), "cached animation source");
        Ok(path)
    }

    /// All cached entries, sorted by id.
    ///
    /// Files that do not follow the `<id>.txt` naming are ignored.
    pub fn entries(&self) -> Result<Vec<CacheEntry>> {
        let dir = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read cache directory: {:?}", self.root))?;

        let mut entries = Vec::new();
        for dir_entry in dir {
            let dir_entry = dir_entry.context("Failed to read cache directory entry")?;
            let path = dir_entry.path();
            let id = match parse_cache_id(&path) {
                Some(id) => id,
                None => continue,
            };
            let metadata = dir_entry
                .metadata()
                .with_context(|| format!("Failed to stat cached animation: {:?}", path))?;
            entries.push(CacheEntry {
                id,
                path,
                size: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Local>::from),
            });
        }

        entries.sort_by_key(|entry| entry.id);
        Ok(entries)
    }

    /// Remove one cached animation. Returns false if it was not cached.
    pub fn remove(&self, id: u32) -> Result<bool> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove cached animation: {:?}", path))?;
        Ok(true)
    }

    /// Remove every cached animation, returning how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let entries = self.entries()?;
        for entry in &entries {
            fs::remove_file(&entry.path)
                .with_context(|| format!("Failed to remove cached animation: {:?}", entry.path))?;
        }
        Ok(entries.len())
    }
}

/// Parse the animation id out of a `<id>.txt` cache filename.
fn parse_cache_id(path: &Path) -> Option<u32> {
    if path.extension()? != "txt" {
        return None;
    }
    path.file_stem()?.to_str()?.parse().ok()
}

//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding test fixture files.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file to a string.
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Create a temp cache directory pre-filled with `(id, source)` entries.
pub fn temp_cache(entries: &[(u32, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (id, source) in entries {
        fs::write(dir.path().join(format!("{id}.txt")), source).unwrap();
    }
    dir
}

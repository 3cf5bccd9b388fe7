//! Configuration management.
//!
//! Settings live in a TOML file at `<config dir>/flick/config.toml`. Every
//! section and field has a default, so a missing or partially filled file
//! works; command-line flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::extract::FrameHeuristic;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub remote: RemoteConfig,
    pub playback: PlaybackConfig,
    pub cache: CacheConfig,
    pub extract: ExtractConfig,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine the config directory")?;
        Ok(base.join("flick").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file does
    /// not exist. A file that exists but does not parse is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Write to the default location, creating directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let text = self.to_toml()?;
        fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Effective configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Gallery endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// URL template; `{id}` is replaced with the animation id
    pub url_template: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url_template: "https://www.asciiworld.com/anim.php?id={id}".to_string(),
            timeout_secs: 30,
        }
    }
}

impl RemoteConfig {
    /// Build the gallery URL for an animation id.
    pub fn url_for(&self, id: u32) -> Result<String> {
        if !self.url_template.contains("{id}") {
            bail!(
                "Invalid url_template {:?}: must contain an {{id}} placeholder",
                self.url_template
            );
        }
        Ok(self.url_template.replace("{id}", &id.to_string()))
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Playback defaults, overridable per run on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Frames per second
    pub fps: f64,
    /// Loops to play; 0 plays until interrupted
    pub loops: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fps: 10.0,
            loops: 1,
        }
    }
}

/// Cache location override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory; the platform cache dir is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Frame extraction thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Minimum candidate length in characters
    pub min_frame_chars: usize,
    /// Require a line break for a candidate to count as a frame
    pub require_line_break: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        let heuristic = FrameHeuristic::default();
        Self {
            min_frame_chars: heuristic.min_chars,
            require_line_break: heuristic.require_line_break,
        }
    }
}

impl ExtractConfig {
    /// Frame heuristic with these thresholds applied.
    pub fn heuristic(&self) -> FrameHeuristic {
        FrameHeuristic {
            min_chars: self.min_frame_chars,
            require_line_break: self.require_line_break,
        }
    }
}

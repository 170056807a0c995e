//! Configuration file support.
//!
//! Settings live in `mousecap/config.toml` under the platform config
//! directory. Every field has a default, so a missing file or a partial
//! file both work; CLI flags override whatever is loaded.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::capture::OutputFormat;

/// Default log file path, shared with the CLI default.
pub const DEFAULT_LOG_FILE: &str = "/tmp/mouse-events.log";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub capture: CaptureSection,
}

/// Settings for the capture session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSection {
    /// Where event lines are written.
    pub log_file: PathBuf,
    /// Format of emitted event lines.
    pub format: OutputFormat,
    /// Whether drag (motion) tracking is enabled.
    pub motion: bool,
}

impl Default for CaptureSection {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            format: OutputFormat::Text,
            motion: true,
        }
    }
}

impl Config {
    /// Path of the config file: `<config_dir>/mousecap/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("mousecap").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path (used by tests).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the config to its default location, creating parent dirs.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, toml_str)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

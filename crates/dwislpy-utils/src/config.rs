//! Configuration file handling for DWISLPY projects.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "dwislpy.toml";

/// Entry script checked when `[check] entry` is not given.
pub const DEFAULT_ENTRY: &str = "src/main.dpy";

/// Represents the dwislpy.toml configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub package: Package,
    #[serde(default)]
    pub check: CheckSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub version: String,
}

/// The `[check]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSettings {
    /// Script to check, relative to the project root.
    #[serde(default = "default_entry")]
    pub entry: PathBuf,
}

fn default_entry() -> PathBuf {
    PathBuf::from(DEFAULT_ENTRY)
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            entry: default_entry(),
        }
    }
}

impl Config {
    /// Creates a new default configuration with the given project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            package: Package {
                name: name.into(),
                version: "0.1.0".to_string(),
            },
            check: CheckSettings::default(),
        }
    }

    /// Loads configuration from a dwislpy.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {CONFIG_FILE}"))
    }

    /// Saves configuration to a dwislpy.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds the dwislpy.toml file starting from the current directory.
    ///
    /// Returns the configuration and the directory that contains it.
    ///
    /// # Errors
    /// Returns an error if no dwislpy.toml is found in the current or parent directories.
    pub fn find() -> Result<(Self, PathBuf)> {
        let current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;
        Self::find_from(current_dir)
    }

    /// Like [`Config::find`], starting from `start` instead of the current directory.
    ///
    /// # Errors
    /// Returns an error if no dwislpy.toml is found in `start` or its ancestors.
    pub fn find_from(start: impl Into<PathBuf>) -> Result<(Self, PathBuf)> {
        let mut current_dir = start.into();

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "found project configuration");
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                anyhow::bail!(
                    "Could not find {CONFIG_FILE} in current directory or any parent directory"
                );
            }
        }
    }

    /// The entry script's path for a project rooted at `project_root`.
    #[must_use]
    pub fn entry_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.check.entry)
    }
}

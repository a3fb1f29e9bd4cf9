use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use versolve_util::errors::VersolveError;

/// Global user configuration loaded from `~/.versolve/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Fallback index location from `[index]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default)]
    pub path: Option<String>,
}

/// Resolution settings from `[resolve]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Print every rejected candidate when a resolution fails.
    #[serde(default, rename = "show-rejections")]
    pub show_rejections: bool,
}

impl GlobalConfig {
    /// Load the global configuration from `~/.versolve/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| VersolveError::Generic {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            VersolveError::Generic {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// The configured fallback index path. Relative paths are taken from the
    /// versolve data directory.
    pub fn index_path(&self) -> Option<PathBuf> {
        self.index
            .path
            .as_deref()
            .map(|p| versolve_util::fs::resolve_relative(&dirs_path(), Path::new(p)))
    }
}

/// Returns the path to the versolve data directory (`~/.versolve/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".versolve")
}

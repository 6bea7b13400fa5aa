//! Router configuration (`waypost.toml`).
//!
//! The bootstrap layer loads this once and hands the relevant pieces to the
//! scanner and compiler. Every field has a default, so an empty file (or no
//! file, via [`RouterConfig::default`]) is a valid configuration.
//!
//! ```toml
//! controllers = "src/controllers"
//! base_group = "v1"
//! prefixes = ["api"]
//!
//! [scan]
//! extension = "rs"
//! exclude = ["application.rs"]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RouterError;

/// Root configuration structure representing waypost.toml
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Controller directory, resolved relative to the application root.
    #[serde(default = "default_controllers")]
    pub controllers: PathBuf,

    /// Base group prepended to every HTTP route pattern.
    #[serde(default)]
    pub base_group: String,

    /// Context prefixes to install (one HTTP install pass per prefix).
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// Scanner settings
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Class scanner settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Source file extension considered a controller definition.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File names excluded from scanning (the application bootstrap file).
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Whether directory symlinks are followed during traversal.
    #[serde(default = "default_true")]
    pub follow_links: bool,
}

fn default_controllers() -> PathBuf {
    PathBuf::from("src/controllers")
}

fn default_extension() -> String {
    "rs".to_string()
}

fn default_exclude() -> Vec<String> {
    vec!["application.rs".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            controllers: default_controllers(),
            base_group: String::new(),
            prefixes: Vec::new(),
            scan: ScanConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            exclude: default_exclude(),
            follow_links: default_true(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a toml file.
    pub fn from_file(path: &Path) -> Result<Self, RouterError> {
        let content =
            fs::read_to_string(path).map_err(|e| RouterError::Io(path.to_path_buf(), e))?;
        Ok(toml::from_str(&content)?)
    }
}

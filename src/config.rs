//
//  config.rs
//  Degrees
//

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DegreesError, Result};
use crate::search::{FrontierKind, SearchOptions};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "degrees.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreesConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Dataset settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding people.csv, movies.csv and stars.csv.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub frontier: FrontierKind,
    /// Sort neighbors so ties between equal-length paths resolve the same way.
    #[serde(default = "default_deterministic")]
    pub deterministic: bool,
}

fn default_directory() -> PathBuf {
    PathBuf::from("large")
}

fn default_deterministic() -> bool {
    true
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            frontier: FrontierKind::default(),
            deterministic: default_deterministic(),
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            deterministic: self.deterministic,
        }
    }
}

impl DegreesConfig {
    /// Load config from a TOML file, falling back to defaults when the file
    /// does not exist. A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| DegreesError::InvalidConfig(e.to_string()))
    }
}

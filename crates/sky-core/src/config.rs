//! Run configuration parsed from a YAML file

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one manifest build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target database name
    pub database: String,

    /// Explicit table emission order.
    ///
    /// When empty, discovered tables are emitted in sorted-name order; when
    /// set, the names must exactly cover the discovered tables (checked as
    /// sets, fatal on mismatch).
    #[serde(default)]
    pub ordered_tables: Vec<String>,

    /// Directory holding `idx_<table>*.json` index configuration files
    pub index_dir: PathBuf,
}

impl Config {
    /// Load a config from a YAML file
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
                path: path.display().to_string(),
                source: e,
            })?;

        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
            message: format!("{}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

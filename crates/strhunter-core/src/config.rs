//! Optional TOML configuration file.
//!
//! Every key mirrors a [`Config`] field; keys that are present overlay the
//! defaults, and explicit CLI flags are expected to win over both.

use std::path::Path;

use serde::Deserialize;

use crate::category::Category;
use crate::error::{Error, Result};
use crate::options::Config;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub skip_file: Option<String>,
    #[serde(default)]
    pub ignore_tests: Option<bool>,
    #[serde(default)]
    pub invalid_pattern: Option<String>,
    #[serde(default)]
    pub exclude_types: Vec<Category>,
    #[serde(default)]
    pub threads: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        toml::from_str(&text).map_err(|err| Error::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Overlay the file's settings onto `cfg`.
    pub fn apply(self, cfg: &mut Config) {
        if let Some(skip_file) = self.skip_file {
            cfg.skip_file = Some(skip_file);
        }
        if let Some(ignore_tests) = self.ignore_tests {
            cfg.ignore_tests = ignore_tests;
        }
        if let Some(invalid_pattern) = self.invalid_pattern {
            cfg.invalid_pattern = invalid_pattern;
        }
        cfg.exclude_types.extend(self.exclude_types);
        if let Some(threads) = self.threads {
            cfg.threads = Some(threads);
        }
    }
}

//! TOML configuration for logging.

use std::{fs, path::Path};

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::args::LogArgs;

/// Observability settings read from a TOML file.
///
/// Every field is optional; missing values fall back to [`Default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log: LogArgs,
}

impl ObservabilityConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).wrap_err("invalid observability config")
    }

    /// Load from `path`. A missing file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Merge CLI arguments over the file values. Flags set on the command
    /// line win.
    pub fn merge_cli(mut self, cli: &LogArgs) -> Self {
        self.log.quiet |= cli.quiet;
        self.log.json |= cli.json;
        self.log.verbosity = cli.verbosity;
        if cli.filter.is_some() {
            self.log.filter.clone_from(&cli.filter);
        }
        self
    }
}

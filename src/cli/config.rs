//! Sink configuration stored in the user's home directory.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the config file in the user's home directory.
pub const CONFIG_FILE: &str = ".zincrc";

/// Sink configuration loaded from `~/.zincrc`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Root directory holding the memos tree
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Writes this configuration to the default config file location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("failed to write config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.zincrc`
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    /// Resolve the sink directory, with the CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `path` setting
    ///
    /// # Errors
    ///
    /// Fails when neither is set.
    pub fn sink_dir(&self, cli_dir: Option<&PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = cli_dir {
            return Ok(dir.clone());
        }
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => bail!("no sink directory configured; run `zinc init <path>` or pass --dir"),
        }
    }
}

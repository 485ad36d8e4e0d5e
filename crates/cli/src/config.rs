use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How the `check` report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration loaded from TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Declaration file used when no `--file` / `TIMEWINDOW_PERIODS` is given
    #[serde(default = "default_periods_file")]
    pub periods_file: PathBuf,

    /// Default report format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_periods_file() -> PathBuf {
    PathBuf::from("periods.json")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            periods_file: default_periods_file(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/timewindow/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("timewindow");
        Ok(config_dir)
    }

    /// Return the default config file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => match Self::default_config_path() {
                Ok(p) => p,
                Err(e) => {
                    debug!(error = %e, "No config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if config_path.exists() {
            debug!(?config_path, "Loading config");
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
            Ok(config)
        } else {
            debug!(?config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the declaration file.
    /// Priority: cli_override (flag or env var) > config file > default.
    pub fn resolve_periods_file(&self, cli_override: Option<&Path>) -> PathBuf {
        match cli_override {
            Some(path) => path.to_path_buf(),
            None => self.periods_file.clone(),
        }
    }

    /// Resolve the report format: `--json` wins over the config file.
    pub fn resolve_output(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}

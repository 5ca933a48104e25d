//! # Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, so
//! running without a file is the same as running with an empty one.
//!
//! ```yaml
//! log:
//!   format: json
//! clock:
//!   fixed_epoch_millis: 1768478400000
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vu_core::Timestamp;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VuConfig {
    /// Log output settings.
    pub log: LogConfig,
    /// Time source used when issuing licenses and stamping reports.
    pub clock: ClockConfig,
}

/// Log output settings. The level comes from `-v` or `RUST_LOG`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Line format written to stderr.
    pub format: LogFormat,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Time source. Unset means the system clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Pin "now" to this many milliseconds since the Unix epoch.
    pub fixed_epoch_millis: Option<i64>,
}

impl ClockConfig {
    /// The current time according to this configuration.
    pub fn now(&self) -> Result<Timestamp> {
        match self.fixed_epoch_millis {
            Some(millis) => Timestamp::from_epoch_millis(millis)
                .with_context(|| format!("invalid clock.fixed_epoch_millis {millis}")),
            None => Ok(Timestamp::now()),
        }
    }
}

impl VuConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        // Surface a bad fixed clock at startup rather than on first use.
        config.clock.now()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise return the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Print the effective configuration as YAML.
pub fn run_config(config: &VuConfig) -> Result<u8> {
    let rendered = serde_yaml::to_string(config).context("failed to render config")?;
    print!("{rendered}");
    Ok(0)
}

//! Configuration for probing and batch resolution.
//!
//! Only transport and batching behavior is configurable. The base URL, suffix
//! patterns and input keywords are fixed constants.
//!
//! ## Sources, lowest precedence first
//!
//! 1. Built-in defaults
//! 2. TOML file: `DOCPROBE_CONFIG`, or `config.toml` in the platform config
//!    directory (see [`Config::default_path`])
//! 3. Environment variables: `DOCPROBE_PROBE_TIMEOUT_SECS`,
//!    `DOCPROBE_BATCH_CONCURRENCY`
//!
//! CLI flags are applied on top by the caller.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [probe]
//! timeout_secs = 5
//! user_agent = "Mozilla/5.0"
//! max_redirects = 5
//!
//! [batch]
//! concurrency = 4
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "DOCPROBE_CONFIG";
/// Environment override for [`ProbeConfig::timeout_secs`].
pub const TIMEOUT_ENV: &str = "DOCPROBE_PROBE_TIMEOUT_SECS";
/// Environment override for [`BatchConfig::concurrency`].
pub const CONCURRENCY_ENV: &str = "DOCPROBE_BATCH_CONCURRENCY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP probe settings.
    pub probe: ProbeConfig,
    /// Batch resolution settings.
    pub batch: BatchConfig,
}

/// Settings for the HTTP existence check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with each probe.
    ///
    /// The Storybook host rejects some non-browser agents, so the default
    /// mimics a browser.
    pub user_agent: String,
    /// Maximum redirects followed before giving up on a candidate.
    pub max_redirects: usize,
}

impl ProbeConfig {
    /// Timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: "Mozilla/5.0".to_string(),
            max_redirects: 5,
        }
    }
}

/// Settings for resolving several component names at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// How many names are resolved at the same time.
    pub concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { concurrency: 4 }
    }
}

impl Config {
    /// Load configuration from `DOCPROBE_CONFIG` or the default location,
    /// then apply environment overrides.
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// the resulting values are invalid.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(explicit) => Some(PathBuf::from(explicit)),
            None => Self::default_path(),
        };
        Self::load_with(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Load from an explicit path (if any) and an environment lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => Self::load_from(path)?,
            _ => Self::default(),
        };
        config.apply_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file without applying overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config {}: {e}", path.display())))
    }

    /// Default config file location for this platform.
    ///
    /// - Linux: `~/.config/docprobe/config.toml`
    /// - macOS: `~/Library/Application Support/no.sikt.docprobe/config.toml`
    /// - Windows: `%APPDATA%\sikt\docprobe\config\config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("no", "sikt", "docprobe")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Apply environment overrides from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if an override is set but is not a number.
    pub fn apply_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = env(TIMEOUT_ENV) {
            self.probe.timeout_secs = parse_override(TIMEOUT_ENV, &raw)?;
        }
        if let Some(raw) = env(CONCURRENCY_ENV) {
            self.batch.concurrency = parse_override(CONCURRENCY_ENV, &raw)?;
        }
        Ok(())
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a zero timeout or zero concurrency.
    pub fn validate(&self) -> Result<()> {
        if self.probe.timeout_secs == 0 {
            return Err(Error::Config("probe.timeout_secs must be at least 1".into()));
        }
        if self.batch.concurrency == 0 {
            return Err(Error::Config("batch.concurrency must be at least 1".into()));
        }
        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} must be a positive integer, got '{raw}'")))
}

//! Configuration file handling

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::{Error, Result};

/// Base URL used when neither the command line nor a config file names one
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// The workflow service under test
    #[serde(default)]
    pub target: TargetConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// The service the suite runs against
#[derive(Debug, Deserialize)]
pub struct TargetConfig {
    /// Scheme, host and port of the workflow service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// Upper bound for a single request, connect included
    #[serde(default = "default_request")]
    pub request_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request_secs: default_request(),
        }
    }
}

fn default_request() -> u64 {
    10
}

impl Timeouts {
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }
}

/// Report output configuration
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Print the response payload beneath each failed assertion
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Load from `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        if config.timeouts.request_secs == 0 {
            return Err(Error::Config(
                "timeouts.request_secs must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}

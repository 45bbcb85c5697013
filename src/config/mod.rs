// ABOUTME: Configuration types and parsing for dockside.yml.
// ABOUTME: Handles YAML parsing, discovery, and command-line overrides.

use crate::error::{Error, Result};
use crate::output::OutputMode;
use crate::runtime::{DEFAULT_TIMEOUT, RuntimeConfig, RuntimeType};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "dockside.yml";
pub const CONFIG_FILENAME_ALT: &str = "dockside.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".dockside/config.yml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Runtime to use instead of auto-detection.
    #[serde(default)]
    pub runtime: Option<RuntimeType>,

    /// Socket path or `tcp://host:port` address of the engine.
    #[serde(default)]
    pub socket: Option<String>,

    /// Transport timeout for engine requests.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default)]
    pub output: OutputMode,
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: None,
            socket: None,
            timeout: default_timeout(),
            output: OutputMode::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`Config::discover`], but a missing file yields the defaults.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        runtime: Option<RuntimeType>,
        socket: Option<String>,
        output: Option<OutputMode>,
    ) -> Self {
        if runtime.is_some() {
            self.runtime = runtime;
        }
        if socket.is_some() {
            self.socket = socket;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// Convert to RuntimeConfig for use with detect_local.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
            socket: self.socket.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.timeout < Duration::from_secs(1) {
            return Err(Error::InvalidConfig("timeout must be at least 1s".to_string()));
        }
        if self.socket.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(Error::InvalidConfig("socket cannot be empty".to_string()));
        }
        Ok(())
    }
}

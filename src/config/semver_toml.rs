//! Parsing and validation for .semver.toml configuration files
//!
//! The file is optional. When it is absent every setting takes its default,
//! which reproduces the plain `VERSION`-file behaviour.

use crate::error::{ConfigError, ParseError};
use crate::output::OutputFormat;
use crate::store::VERSION_FILE;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = ".semver.toml";

/// Starting version offered by `semver init`
pub const DEFAULT_INITIAL_VERSION: &str = "0.1.0";

/// Main configuration struct for .semver.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Version file settings
    #[serde(default)]
    pub version: VersionConfig,

    /// `init` command settings
    #[serde(default)]
    pub init: InitConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.semver.toml` from `dir`, falling back to defaults when absent
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(dir = %dir.display(), "no {CONFIG_FILE}, using defaults");
            return Ok(Config::default());
        }

        tracing::debug!(path = %path.display(), "loading configuration");
        Self::load(path)
    }

    /// Path of the version file for a project rooted at `dir`
    pub fn version_file(&self, dir: &Path) -> PathBuf {
        dir.join(&self.version.file)
    }

    /// Starting version offered by `init`
    pub fn initial_version(&self) -> Result<Version, ParseError> {
        Version::parse(&self.version.initial)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.version.file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "version.file".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        self.initial_version()
            .map_err(|e| ConfigError::InvalidValue {
                field: "version.initial".to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

/// `[version]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Version file, relative to the working directory
    pub file: PathBuf,

    /// Starting version offered by `init`
    pub initial: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(VERSION_FILE),
            initial: DEFAULT_INITIAL_VERSION.to_string(),
        }
    }
}

/// `[init]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InitConfig {
    /// Refuse to create a version file outside a git checkout
    pub require_checkout: bool,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            require_checkout: true,
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default format for `semver version`
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

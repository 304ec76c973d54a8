//! Configuration management for Testscan.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `testscan.toml` file
//! 3. User config `~/.config/testscan/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suite scanning configuration.
    pub suites: SuiteConfig,

    /// Required-file check configuration.
    pub structure: StructureConfig,

    /// Manifest dependency check configuration.
    pub dependencies: DependencyConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./testscan.toml` (project local)
    /// 2. `~/.config/testscan/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new("testscan.toml").exists() {
            return Self::from_file("testscan.toml");
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("testscan").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Use defaults, still honoring environment overrides
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(suffix) = std::env::var("TESTSCAN_TEST_SUFFIX") {
            self.suites.test_suffix = suffix;
        }
        if let Ok(manifest) = std::env::var("TESTSCAN_MANIFEST") {
            self.dependencies.manifest = manifest;
        }
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Suite scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Suite directories to scan, relative to the project root.
    pub dirs: Vec<String>,

    /// File-name suffix identifying a test file.
    pub test_suffix: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            dirs: DEFAULT_SUITE_DIRS.iter().map(|s| s.to_string()).collect(),
            test_suffix: DEFAULT_TEST_SUFFIX.to_string(),
        }
    }
}

/// Required-file check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Files that must exist in the project, relative to the root.
    pub required_files: Vec<String>,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            required_files: DEFAULT_REQUIRED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Manifest dependency check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    /// Manifest file to probe, relative to the project root.
    pub manifest: String,

    /// Dependency markers that must appear in the manifest.
    pub required: Vec<String>,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST_FILE.to_string(),
            required: DEFAULT_REQUIRED_DEPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

//! Configuration schema for jarfetch
//!
//! Configuration is stored at `~/.config/jarfetch/config.toml`

use crate::coordinate::DEFAULT_REPOSITORY;
use crate::manager::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cache settings
    pub cache: CacheConfig,

    /// Download settings
    pub fetch: FetchConfig,
}

impl Config {
    /// Effective cache directory
    pub fn cache_dir(&self) -> PathBuf {
        self.cache
            .dir
            .clone()
            .unwrap_or_else(super::ConfigManager::default_cache_dir)
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log each dependency as it is loaded, downloaded and installed
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            log_format: "text".to_string(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory (default: platform cache dir)
    pub dir: Option<PathBuf>,
}

/// Download configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Repository for coordinates that don't name one
    pub default_repository: String,

    /// Per-request timeout in seconds (0 = wait forever)
    pub timeout_secs: u64,

    /// "stop" at the first unavailable dependency, or "continue"
    pub failure_policy: FailurePolicy,
}

impl FetchConfig {
    /// Timeout as a duration, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            default_repository: DEFAULT_REPOSITORY.to_string(),
            timeout_secs: 0,
            failure_policy: FailurePolicy::Stop,
        }
    }
}

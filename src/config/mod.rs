//! Configuration Module - TOML-based Watcher Configuration
//!
//! Loads configuration from `serverwatch.toml`. Every field has a
//! default, so a missing file (the common desktop install) runs on
//! the built-ins; only the credential lives elsewhere (cache file or
//! environment).

pub mod loader;

use serde::Deserialize;

use crate::adapters::api::client::SERVER_LIST_ENDPOINT;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Process-level settings.
    pub app: AppSection,
    /// Directory endpoint settings.
    pub api: ApiSection,
    /// Refresh pacing.
    pub poll: PollSection,
    /// Cache file location.
    pub cache: CacheSection,
}

/// Process-level settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSection {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

/// Directory endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Server-list endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

/// Refresh pacing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollSection {
    /// Seconds between refresh ticks.
    pub interval_seconds: u64,
}

/// Cache file location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    /// Path of the JSON cache file.
    pub path: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for PollSection {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval(),
        }
    }
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

// Default value functions for serde

fn default_log_level() -> String {
    "info".to_string()
}

fn default_endpoint() -> String {
    SERVER_LIST_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_interval() -> u64 {
    15
}

fn default_cache_path() -> String {
    "server_cache.json".to_string()
}

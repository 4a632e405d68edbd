// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console configuration.
//!
//! Configuration is stored in `config.toml` inside the console home
//! (`$NEXTVISA_HOME`, else the platform config directory) and includes:
//! - `api_url`: base address of the backend API
//! - `request_timeout_secs`: optional per-request timeout
//! - `[cache]`: freshness window and read retry policy
//! - `[watch]`: poll interval for `nextvisa watch`
//!
//! Every field has a default, so a missing file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::sync::{RetryPolicy, StoreSettings};

const CONFIG_FILE_NAME: &str = "config.toml";
const SESSION_FILE_NAME: &str = "session";
const HOME_DIR_NAME: &str = "nextvisa";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "api_url",
    "request_timeout_secs",
    "cache.stale_after_secs",
    "cache.retry.max_retries",
    "cache.retry.initial_delay_ms",
    "cache.retry.max_delay_secs",
    "watch.interval_secs",
];

/// Console configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    /// Unset leaves timeouts to the network stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    pub cache: CacheConfig,
    pub watch: WatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
            cache: CacheConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Freshness window for applicant reads (seconds).
    pub stale_after_secs: u64,
    pub retry: RetryPolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            stale_after_secs: 300,
            retry: RetryPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig { interval_secs: 5 }
    }
}

impl Config {
    /// Loads configuration from `home`, or defaults when no file exists.
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = config_path(home);
        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", config_path.display(), e)))
    }

    /// Saves configuration to `home`, creating the directory if needed.
    pub fn save(&self, home: &Path) -> Result<()> {
        fs::create_dir_all(home)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(config_path(home), content)?;
        Ok(())
    }

    /// Replace `api_url` when an override is present.
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    /// Set a single key, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "api_url" => {
                reqwest::Url::parse(value).map_err(|e| invalid(key, value, e.to_string()))?;
                self.api_url = value.trim_end_matches('/').to_string();
            }
            "request_timeout_secs" => {
                self.request_timeout_secs = match value {
                    "" | "none" => None,
                    _ => Some(positive(key, value)?),
                };
            }
            "cache.stale_after_secs" => self.cache.stale_after_secs = number(key, value)?,
            "cache.retry.max_retries" => {
                self.cache.retry.max_retries = u32::try_from(number(key, value)?)
                    .map_err(|e| invalid(key, value, e.to_string()))?
            }
            "cache.retry.initial_delay_ms" => {
                self.cache.retry.initial_delay_ms = positive(key, value)?
            }
            "cache.retry.max_delay_secs" => self.cache.retry.max_delay_secs = positive(key, value)?,
            "watch.interval_secs" => self.watch.interval_secs = positive(key, value)?,
            _ => {
                return Err(Error::UnknownConfigKey {
                    key: key.to_string(),
                    valid: CONFIG_KEYS.join(", "),
                })
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn watch_interval(&self) -> Duration {
        Duration::from_secs(self.watch.interval_secs.max(1))
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            applicant_stale_after: Duration::from_secs(self.cache.stale_after_secs),
            retry: self.cache.retry,
        }
    }
}

fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Error {
    Error::InvalidConfigValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn number(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| invalid(key, value, "expected a whole number"))
}

fn positive(key: &str, value: &str) -> Result<u64> {
    match number(key, value)? {
        0 => Err(invalid(key, value, "must be greater than zero")),
        n => Ok(n),
    }
}

/// Resolve the console home directory.
pub fn console_home() -> Result<PathBuf> {
    crate::env::console_home()
        .or_else(|| dirs::config_dir().map(|dir| dir.join(HOME_DIR_NAME)))
        .ok_or(Error::NoHomeDir)
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

pub fn session_path(home: &Path) -> PathBuf {
    home.join(SESSION_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

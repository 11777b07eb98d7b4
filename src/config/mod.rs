//
//  gerrit-rest
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Configuration for Gerrit connections, available in three forms:
//!
//! - **Programmatic**: [`ConnectionConfig`] built with `with_*` methods
//! - **Environment**: [`ConnectionConfig::from_env`] reading `GERRIT_HOST`,
//!   `GERRIT_USERNAME` and `GERRIT_PASSWORD`
//! - **File**: [`Config`], a TOML file holding one entry per Gerrit host
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/gerrit-rest/config.toml`
//! - **macOS**: `~/Library/Application Support/gerrit-rest/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\gerrit-rest\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! default_host = "review.example.com"
//!
//! [hosts."review.example.com"]
//! url = "https://review.example.com"
//! username = "jdoe"
//! verify = true
//! cache = true
//! cache_expire_secs = 3
//! retries = 5
//! timeout_secs = 30
//! ```
//!
//! ## Submodules
//!
//! - [`connection`]: Connection, retry and cache policies
//! - [`file`]: Low-level configuration file I/O operations
//! - [`hosts`]: Host URL validation and normalization

mod connection;
mod file;
mod hosts;

pub use connection::*;
pub use file::*;
pub use hosts::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::auth::Credential;

/// Application name used for the configuration directory.
pub const APP_NAME: &str = "gerrit-rest";

/// Environment variable overriding a host entry's stored password.
pub const PASSWORD_ENV: &str = "GERRIT_PASSWORD";

/// Contents of the configuration file.
///
/// # Fields
///
/// * `default_host` - Key of the host used by [`Config::default_connection`]
/// * `hosts` - Map of host key (see [`host_key`]) to host settings
///
/// # Examples
///
/// ```rust
/// use gerrit_rest::config::{Config, HostConfig};
///
/// let mut config = Config::default();
/// config.add_host(HostConfig::new("https://review.example.com"));
///
/// assert!(config.host_config("https://review.example.com/").is_some());
/// assert_eq!(config.default_host.as_deref(), Some("review.example.com"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Host used when none is named explicitly.
    #[serde(default)]
    pub default_host: Option<String>,

    /// Host-specific settings, keyed by normalized host.
    #[serde(default)]
    pub hosts: HashMap<String, HostConfig>,
}

/// Settings for one Gerrit host.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `verify` | `true` |
/// | `cache` | `true` |
/// | `cache_expire_secs` | `3` |
/// | `retries` | `5` |
/// | `timeout_secs` | `30` |
///
/// # Notes
///
/// - `password` is the Gerrit HTTP password. Prefer leaving it out of the file
///   and exporting `GERRIT_PASSWORD` instead, which always wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    /// Base URL of the server, including the scheme.
    pub url: String,

    /// Username for Basic authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// HTTP password for Basic authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Whether TLS certificates are verified.
    #[serde(default = "default_true")]
    pub verify: bool,

    /// Whether GET responses are cached.
    #[serde(default = "default_true")]
    pub cache: bool,

    /// Lifetime of cached responses in seconds.
    #[serde(default = "default_cache_expire_secs")]
    pub cache_expire_secs: u64,

    /// Number of transport retries.
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Request timeout in seconds; `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_cache_expire_secs() -> u64 {
    DEFAULT_CACHE_EXPIRE.as_secs()
}

fn default_retries() -> u32 {
    DEFAULT_RETRIES
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl HostConfig {
    /// Creates host settings for `url` with default values.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            verify: default_true(),
            cache: default_true(),
            cache_expire_secs: default_cache_expire_secs(),
            retries: default_retries(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Builds the connection configuration for this host.
    ///
    /// A Basic credential is attached when a username is set and a password is
    /// available, from `GERRIT_PASSWORD` or else from the file.
    pub fn connection_config(&self) -> ConnectionConfig {
        let password = std::env::var(PASSWORD_ENV)
            .ok()
            .or_else(|| self.password.clone());
        self.connection_config_with_password(password)
    }

    fn connection_config_with_password(&self, password: Option<String>) -> ConnectionConfig {
        let cache = if self.cache {
            CachePolicy::expiring(Duration::from_secs(self.cache_expire_secs))
        } else {
            CachePolicy::disabled()
        };
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));

        let mut config = ConnectionConfig::new(self.url.clone())
            .with_verify(self.verify)
            .with_cache(cache)
            .with_retry(RetryPolicy::default().with_total(self.retries))
            .with_timeout(timeout);

        if let (Some(username), Some(password)) = (&self.username, password) {
            config = config.with_auth(Credential::basic(username.clone(), password));
        }
        config
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; the default (empty) configuration is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path` as pretty TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the settings for `host`, matched through [`host_key`].
    pub fn host_config(&self, host: &str) -> Option<&HostConfig> {
        self.hosts.get(&host_key(host))
    }

    /// Adds or replaces a host entry.
    ///
    /// The first host added becomes the default host.
    pub fn add_host(&mut self, host: HostConfig) {
        let key = host_key(&host.url);
        if self.default_host.is_none() {
            self.default_host = Some(key.clone());
        }
        self.hosts.insert(key, host);
    }

    /// Builds the connection configuration of the default host.
    ///
    /// # Errors
    ///
    /// Returns an error when no default host is set or it has no entry.
    pub fn default_connection(&self) -> Result<ConnectionConfig> {
        let key = self
            .default_host
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No default host configured"))?;
        let host = self
            .host_config(key)
            .ok_or_else(|| anyhow::anyhow!("No configuration for host '{}'", key))?;
        Ok(host.connection_config())
    }
}

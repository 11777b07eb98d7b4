//
//  gerrit-rest
//  config/connection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Connection Configuration
//!
//! Everything a session needs to talk to one Gerrit host: the base URL, the
//! credential, TLS verification, and the retry and cache policies of the
//! transport.
//!
//! A [`ConnectionConfig`] is consumed when the client is built and shared,
//! unchanged, by every resource object derived from that client.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use gerrit_rest::auth::Credential;
//! use gerrit_rest::config::{CachePolicy, ConnectionConfig, RetryPolicy};
//!
//! let config = ConnectionConfig::new("https://review.example.com")
//!     .with_auth(Credential::basic("jdoe", "http-password"))
//!     .with_retry(RetryPolicy::none())
//!     .with_cache(CachePolicy::expiring(Duration::from_secs(10)));
//!
//! assert!(config.is_authenticated());
//! assert_eq!(config.retry.total, 0);
//! ```

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};

use crate::auth::Credential;

/// Default number of retries performed by the transport.
pub const DEFAULT_RETRIES: u32 = 5;

/// Default backoff multiplier, in seconds.
pub const DEFAULT_BACKOFF_FACTOR: f64 = 0.3;

/// Statuses retried by default.
pub const DEFAULT_RETRY_STATUSES: [u16; 3] = [500, 502, 504];

/// Default lifetime of cached GET responses.
pub const DEFAULT_CACHE_EXPIRE: Duration = Duration::from_secs(3);

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound for a single backoff sleep.
const MAX_BACKOFF: Duration = Duration::from_secs(120);

/// Retry behaviour of the transport.
///
/// Retries cover connection failures, timeouts, and responses whose status is
/// listed in `status_forcelist`. Only idempotent methods are retried, so a POST
/// is never sent twice.
///
/// # Backoff
///
/// The first retry is immediate. Retry `n` (1-based, `n >= 2`) sleeps
/// `backoff_factor * 2^(n-1)` seconds, capped at two minutes. With the defaults
/// that is `0, 0.6, 1.2, 2.4, 4.8` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub total: u32,
    /// Backoff multiplier, in seconds.
    pub backoff_factor: f64,
    /// Response statuses that trigger a retry.
    pub status_forcelist: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            total: DEFAULT_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            status_forcelist: DEFAULT_RETRY_STATUSES.to_vec(),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            total: 0,
            ..Self::default()
        }
    }

    /// Sets the number of retries.
    pub fn with_total(mut self, total: u32) -> Self {
        self.total = total;
        self
    }

    /// Sets the backoff multiplier in seconds.
    pub fn with_backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = factor;
        self
    }

    /// Checks whether requests with this method may be retried.
    pub fn allows(&self, method: &Method) -> bool {
        [
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::TRACE,
        ]
        .contains(method)
    }

    /// Checks whether a response with this status should be retried.
    pub fn retries_status(&self, status: StatusCode) -> bool {
        self.status_forcelist.contains(&status.as_u16())
    }

    /// Sleep before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        if retry <= 1 || self.backoff_factor <= 0.0 {
            return Duration::ZERO;
        }
        let exponent = (retry - 1).min(31) as i32;
        let secs = self.backoff_factor * 2f64.powi(exponent);
        Duration::from_secs_f64(secs.min(MAX_BACKOFF.as_secs_f64()))
    }
}

/// Response cache behaviour of the session.
///
/// When enabled, successful GET responses are kept for `expire_after` and
/// served from memory for identical requests. Mutating requests do not
/// invalidate entries, so a read right after a write may be stale for at most
/// `expire_after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// Whether GET responses are cached.
    pub enabled: bool,
    /// How long a cached response stays valid.
    pub expire_after: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            expire_after: DEFAULT_CACHE_EXPIRE,
        }
    }
}

impl CachePolicy {
    /// A policy with caching turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// A policy caching responses for `expire_after`.
    pub fn expiring(expire_after: Duration) -> Self {
        Self {
            enabled: true,
            expire_after,
        }
    }
}

/// Configuration of one connection to a Gerrit host.
///
/// # Fields
///
/// * `host` - Base URL of the server, including the scheme and any path prefix
/// * `credential` - Optional credential; without one, anonymous endpoints are used
/// * `verify` - Whether TLS certificates are verified
/// * `retry` - Transport retry policy
/// * `cache` - Response cache policy
/// * `timeout` - Per-request timeout, `None` for no timeout
/// * `user_agent` - Value of the `User-Agent` header
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Gerrit server.
    pub host: String,
    /// Credential attached to every request.
    pub credential: Option<Credential>,
    /// Whether TLS certificates are verified.
    pub verify: bool,
    /// Transport retry policy.
    pub retry: RetryPolicy,
    /// Response cache policy.
    pub cache: CachePolicy,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl ConnectionConfig {
    /// Creates a configuration for `host` with default policies and no credential.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            credential: None,
            verify: true,
            retry: RetryPolicy::default(),
            cache: CachePolicy::default(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: format!("gerrit-rest/{}", crate::VERSION),
        }
    }

    /// Loads a configuration from the environment.
    ///
    /// Env vars:
    /// - `GERRIT_HOST` [required]
    /// - `GERRIT_USERNAME` and `GERRIT_PASSWORD` (optional, Basic credential
    ///   when both are set)
    ///
    /// # Errors
    ///
    /// Fails with the missing variable named in the context when `GERRIT_HOST`
    /// is unset or not valid unicode.
    pub fn from_env() -> Result<Self> {
        let host = env::var("GERRIT_HOST").context("Missing GERRIT_HOST")?;
        let mut config = Self::new(host);

        if let (Ok(username), Ok(password)) = (env::var("GERRIT_USERNAME"), env::var("GERRIT_PASSWORD")) {
            config = config.with_auth(Credential::basic(username, password));
        }

        Ok(config)
    }

    /// Sets the credential.
    pub fn with_auth(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Enables or disables TLS certificate verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Replaces the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replaces the cache policy.
    pub fn with_cache(mut self, cache: CachePolicy) -> Self {
        self.cache = cache;
        self
    }

    /// Sets the per-request timeout; `None` disables it.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks whether a credential is configured.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

//
//  gerrit-rest
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Gerrit Client
//!
//! The root of the resource tree. A [`GerritClient`] owns the shared
//! [`Session`] and hands out the top-level collections:
//!
//! - [`changes`](GerritClient::changes) → `/changes/`
//! - [`projects`](GerritClient::projects) → `/projects/`
//! - [`access`](GerritClient::access) → `/access/`
//!
//! ## Features
//!
//! - Authenticated (`/a/...`) or anonymous endpoints, chosen by whether a
//!   credential is configured
//! - Transport retries on connection failures and 500/502/504 responses
//! - Short-lived cache of GET responses
//! - Custom User-Agent header

use std::sync::Arc;

use super::access::Access;
use super::changes::Changes;
use super::common::Result;
use super::projects::Projects;
use super::session::Session;
use crate::config::{Config, ConnectionConfig};

/// The main entry point for talking to a Gerrit server.
///
/// Cloning the client is cheap; clones share the session and its cache.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use gerrit_rest::api::GerritClient;
/// use gerrit_rest::auth::Credential;
/// use gerrit_rest::config::ConnectionConfig;
///
/// // Anonymous access
/// let anonymous = GerritClient::new(ConnectionConfig::new("https://review.example.com"))?;
///
/// // Authenticated with an HTTP password
/// let client = GerritClient::new(
///     ConnectionConfig::new("https://review.example.com")
///         .with_auth(Credential::basic("jdoe", "http-password")),
/// )?;
/// # Ok::<(), gerrit_rest::api::common::ApiError>(())
/// ```
///
/// # Navigating the Resource Tree
///
/// ```rust,no_run
/// use gerrit_rest::api::GerritClient;
/// use gerrit_rest::api::common::Query;
/// use gerrit_rest::config::ConnectionConfig;
///
/// let client = GerritClient::new(ConnectionConfig::new("https://review.example.com"))?;
///
/// let change = client.changes().id("12345");
/// let detail = change.detail(&Query::new())?;
/// let diff = change.current_revision().file("src/lib.rs").diff(&Query::new())?;
/// # Ok::<(), gerrit_rest::api::common::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GerritClient {
    session: Arc<Session>,
}

impl GerritClient {
    /// Creates a client from a connection configuration.
    ///
    /// # Parameters
    ///
    /// * `config` - Host, credential and transport policies
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidHost`](super::common::ApiError::InvalidHost)
    /// when the host is not an http(s) URL, or
    /// [`ApiError::Transport`](super::common::ApiError::Transport) when the
    /// HTTP client cannot be built.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        Ok(Self {
            session: Arc::new(Session::new(config)?),
        })
    }

    /// Creates a client from the environment.
    ///
    /// Reads `GERRIT_HOST`, and `GERRIT_USERNAME` plus `GERRIT_PASSWORD` for
    /// Basic authentication.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ConnectionConfig::from_env()?;
        Ok(Self::new(config)?)
    }

    /// Creates a client for the default host of the configuration file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gerrit_rest::api::GerritClient;
    /// use gerrit_rest::config::Config;
    ///
    /// let config = Config::load()?;
    /// let client = GerritClient::from_config(&config)?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(config.default_connection()?)?)
    }

    /// The `/changes/` collection.
    pub fn changes(&self) -> Changes {
        Changes::new(Arc::clone(&self.session))
    }

    /// The `/projects/` collection.
    pub fn projects(&self) -> Projects {
        Projects::new(Arc::clone(&self.session))
    }

    /// The `/access/` collection.
    pub fn access(&self) -> Access {
        Access::new(Arc::clone(&self.session))
    }

    /// The session shared by every resource of this client.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Checks whether requests go to the authenticated endpoints.
    pub fn is_authenticated(&self) -> bool {
        self.session.config().is_authenticated()
    }

    /// Drops every cached response.
    ///
    /// The underlying connections are released when the last clone of the
    /// client, and every resource derived from it, is dropped.
    pub fn close(&self) {
        self.session.clear_cache();
    }
}

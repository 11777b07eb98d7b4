//
//  gerrit-rest
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Gerrit REST Client Library
//!
//! A client for the Gerrit Code Review REST API that exposes the server's
//! resource hierarchy (changes, revisions, files, reviewers, change edits,
//! projects, access rights) as a tree of addressable objects.
//!
//! ## Overview
//!
//! Each resource object knows its endpoint template and identity (change id,
//! revision id, file path, ...). Calling a method resolves the URL, dispatches
//! the HTTP verb through a shared session and normalizes the response.
//!
//! ## Features
//!
//! - **Resource Tree**: `client.changes().id(..).revision(..).file(..)`
//! - **Authenticated or Anonymous**: `/a/...` endpoints when a credential is set
//! - **Response Normalization**: the `)]}'` prefix is stripped and JSON parsed
//!   into [`Payload`], with typed records available through serde
//! - **Retry and Cache**: transport retries with exponential backoff and a
//!   short-lived GET cache
//! - **Configuration**: programmatic, environment or TOML file
//!
//! ## Module Structure
//!
//! - [`api`]: Resource tree, dispatcher, normalizer and URL builder
//! - [`auth`]: Credentials (HTTP Basic, Bearer)
//! - [`config`]: Connection configuration and the configuration file
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gerrit_rest::{ConnectionConfig, Credential, GerritClient, Query};
//!
//! let client = GerritClient::new(
//!     ConnectionConfig::new("https://review.example.com")
//!         .with_auth(Credential::basic("jdoe", "http-password")),
//! )?;
//!
//! let open = client.changes().query(&Query::new().q("status:open owner:self"))?;
//! let commit = client.changes().id("12345").current_revision().commit_info()?;
//! println!("{}", commit.subject.unwrap_or_default());
//! # Ok::<(), gerrit_rest::ApiError>(())
//! ```
//!
//! ## Logging
//!
//! The library emits `tracing` events (requests at `debug`, retries at
//! `warn`) and never installs a subscriber itself.

/// Gerrit REST API client layer.
///
/// Provides the resource tree rooted at [`GerritClient`], the verb dispatcher,
/// the response normalizer and the URL builder.
pub mod api;

/// Authentication credentials.
///
/// Handles HTTP Basic (Gerrit HTTP password) and Bearer token authentication.
pub mod auth;

/// Connection configuration.
///
/// Manages per-connection settings and the TOML configuration file stored in
/// platform-specific locations:
/// - Linux: `~/.config/gerrit-rest/config.toml`
/// - macOS: `~/Library/Application Support/gerrit-rest/config.toml`
/// - Windows: `%APPDATA%\gerrit-rest\config.toml`
pub mod config;

/// Re-export of the root client.
pub use api::GerritClient;

/// Re-export of the common API types.
pub use api::{ApiError, Payload, Query, RawResponse};

/// Re-export of the credential type.
pub use auth::Credential;

/// Re-export of the connection configuration.
pub use config::ConnectionConfig;

/// Library version constant.
///
/// Derived from Cargo.toml at compile time and sent in the default
/// `User-Agent` header.
///
/// # Example
///
/// ```rust
/// use gerrit_rest::VERSION;
///
/// println!("gerrit-rest version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

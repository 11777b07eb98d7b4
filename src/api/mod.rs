//
//  gerrit-rest
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module maps the Gerrit Code Review REST API onto a tree of resource
//! objects whose methods correspond one-to-one to HTTP endpoints.
//!
//! ## Architecture
//!
//! The layer is organized leaf-first:
//!
//! - [`url`]: Path joining and percent-encoded template substitution
//! - [`response`]: Anti-hijacking prefix removal and JSON normalization
//! - [`cache`]: Time-bounded cache of GET responses
//! - [`session`]: The verb dispatcher (GET/PUT/POST/DELETE) with retry and cache
//! - [`resource`]: Descriptor-driven path resolution for resource types
//! - [`client`], [`changes`], [`projects`], [`access`]: The resource tree
//! - [`models`]: Typed records and request inputs
//! - [`common`]: Shared types (errors, query parameters)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gerrit_rest::api::GerritClient;
//! use gerrit_rest::api::common::Query;
//! use gerrit_rest::auth::Credential;
//! use gerrit_rest::config::ConnectionConfig;
//!
//! let client = GerritClient::new(
//!     ConnectionConfig::new("https://review.example.com")
//!         .with_auth(Credential::basic("jdoe", "http-password")),
//! )?;
//!
//! let change = client.changes().id("12345");
//! if change.is_merge()? {
//!     let parents = change.current_revision().get_parent_info()?;
//!     println!("{:?}", parents);
//! }
//! # Ok::<(), gerrit_rest::api::common::ApiError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result`](common::Result) over [`ApiError`]:
//!
//! - `Http`: the server answered with a non-2xx status
//! - `Transport`: the server could not be reached after retries
//! - `MalformedResponse`: a JSON endpoint returned something else

/// Access rights collection.
pub mod access;

/// Response cache used by the session.
pub mod cache;

/// Changes, revisions, files, reviewers and change edits.
pub mod changes;

/// Root client handing out the top-level collections.
pub mod client;

/// Shared types: [`ApiError`], [`Result`](common::Result) and [`Query`].
pub mod common;

/// Typed Gerrit entities and request inputs.
pub mod models;

/// Projects collection.
pub mod projects;

/// Resource descriptors and path resolution.
pub mod resource;

/// Response normalization.
pub mod response;

/// HTTP session and verb dispatch.
pub mod session;

/// Path construction helpers.
pub mod url;

/// Re-export of the root client.
pub use client::GerritClient;

/// Re-export of common API types.
pub use common::{ApiError, Query};

pub use resource::Resource;
pub use response::{Payload, RawResponse};

//
//  gerrit-rest
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Gerrit REST client
//!
//! This module provides the types shared by every resource module: the unified
//! error type and the query-parameter builder.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Result`] - Crate-wide result alias over [`ApiError`]
//! - [`Query`] - Ordered query parameters (re-exported from the [`query`] submodule)
//!
//! # Example
//!
//! ```rust
//! use gerrit_rest::api::common::ApiError;
//!
//! fn handle<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is_not_found() => println!("No such change"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

mod query;

pub use query::*;

/// Result alias used by every API operation.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for all Gerrit API operations.
///
/// Every operation either fully succeeds or fails with exactly one of these
/// variants. No variant carries a partially parsed value.
///
/// # Variants
///
/// | Variant | Description | Raised |
/// |---------|-------------|--------|
/// | `Transport` | Connection, DNS or timeout failure | after the retry budget |
/// | `Http` | Non-2xx response status | right after the call |
/// | `MalformedResponse` | Body is not valid JSON | while normalizing |
/// | `MissingIdentityAttribute` | Resource type misdeclared | when resolving a URL |
/// | `ArgumentMismatch` | Template/value count mismatch | when building a URL |
/// | `InvalidHost` | Host is not an http(s) URL | when building the client |
/// | `Serialize` | Request payload is not serializable | before the call |
/// | `Decode` | Payload does not match a typed record | after normalizing |
/// | `ContentDecode` | Base64 file content is invalid | after the call |
/// | `ParentResolution` | Parent commits cannot be classified | derived operations |
///
/// # Example
///
/// ```rust
/// use gerrit_rest::api::common::ApiError;
/// use reqwest::StatusCode;
///
/// let err = ApiError::Http {
///     status: StatusCode::NOT_FOUND,
///     url: "https://review.example.com/a/changes/1".to_string(),
///     body: "Not found: 1".to_string(),
/// };
///
/// assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
/// assert!(err.is_not_found());
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, timeouts and DNS resolution errors that
    /// persisted through the session's retry policy.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// Gerrit error bodies are plain text, so the body is kept verbatim.
    #[error("HTTP {status} from {url}: {body}")]
    Http {
        /// Status code of the response.
        status: StatusCode,
        /// Final URL of the request.
        url: String,
        /// Raw response body.
        body: String,
    },

    /// A non-empty body could not be parsed as JSON.
    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        /// Final URL of the request.
        url: String,
        /// Raw body, after the anti-hijacking prefix was removed.
        body: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A resource type declared an identity attribute its instances do not carry.
    #[error("Resource '{resource}' has no identity attribute '{attribute}'")]
    MissingIdentityAttribute {
        /// Name of the resource type.
        resource: &'static str,
        /// The declared attribute that could not be resolved.
        attribute: &'static str,
    },

    /// A path template was filled with the wrong number of values.
    #[error("Template '{template}' expects {expected} values, got {supplied}")]
    ArgumentMismatch {
        /// The template being filled.
        template: String,
        /// Number of `{}` placeholders in the template.
        expected: usize,
        /// Number of values supplied.
        supplied: usize,
    },

    /// The configured host is not a usable base URL.
    #[error("Invalid host '{host}': {reason}")]
    InvalidHost {
        /// The host string as configured.
        host: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A request payload could not be serialized to JSON.
    #[error("Failed to serialize request payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A normalized payload did not match the requested record type.
    #[error("Unexpected response shape: {0}")]
    Decode(#[source] serde_json::Error),

    /// A base64-encoded content body could not be decoded.
    #[error("Invalid base64 content from {url}: {source}")]
    ContentDecode {
        /// Final URL of the request.
        url: String,
        /// The underlying decode error.
        #[source]
        source: base64::DecodeError,
    },

    /// The parent commits of a revision could not be classified.
    #[error("Cannot resolve parent changes: {0}")]
    ParentResolution(String),
}

impl ApiError {
    /// Returns the HTTP status carried by this error, if any.
    ///
    /// Transport errors report the status reqwest attached to them, which is
    /// only set for errors raised from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Checks whether this error is a 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_http_errors() {
        let http = ApiError::Http {
            status: StatusCode::CONFLICT,
            url: "https://review.example.com/a/changes/1/rebase".to_string(),
            body: "change is already up to date".to_string(),
        };
        assert_eq!(http.status(), Some(StatusCode::CONFLICT));
        assert!(!http.is_not_found());

        let mismatch = ApiError::ArgumentMismatch {
            template: "a/changes/{}".to_string(),
            expected: 1,
            supplied: 2,
        };
        assert_eq!(mismatch.status(), None);
    }

    #[test]
    fn test_display_carries_context() {
        let err = ApiError::Http {
            status: StatusCode::FORBIDDEN,
            url: "https://review.example.com/a/changes/1/topic".to_string(),
            body: "not permitted".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("/a/changes/1/topic"));
        assert!(message.contains("not permitted"));
    }
}

//
//  gerrit-rest
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Host Normalization
//!
//! Gerrit sites are addressed by a base URL which may carry a path prefix when
//! the server runs behind a reverse proxy (`https://host/gerrit/`). Two forms
//! are derived from a configured host:
//!
//! - [`base_url`]: the validated base URL every request path is appended to
//! - [`host_key`]: a scheme-less, lowercase key used to index the config file
//!
//! ## Usage
//!
//! ```rust
//! use gerrit_rest::config::{base_url, host_key};
//!
//! assert_eq!(base_url("https://review.example.com").unwrap(), "https://review.example.com/");
//! assert_eq!(host_key("https://Review.Example.com/"), "review.example.com");
//! ```

use url::Url;

use crate::api::common::{ApiError, Result};

/// Validates a host and returns it as a base URL ending with `/`.
///
/// # Parameters
///
/// * `host` - The configured host, including the `http(s)://` scheme
///
/// # Errors
///
/// Returns [`ApiError::InvalidHost`] when the host does not parse as a URL,
/// uses a scheme other than `http` or `https`, or has no host name.
pub fn base_url(host: &str) -> Result<String> {
    let invalid = |reason: String| ApiError::InvalidHost {
        host: host.to_string(),
        reason,
    };

    let url = Url::parse(host.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host name".to_string()));
    }

    let mut base = url.as_str().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}

/// Normalizes a host for use as a configuration key.
///
/// Strips the scheme and trailing slashes and lowercases the result, so
/// `https://Review.Example.com/` and `review.example.com` share one entry.
pub fn host_key(host: &str) -> String {
    let host = host.trim();
    let host = host.strip_prefix("https://").unwrap_or(host);
    let host = host.strip_prefix("http://").unwrap_or(host);
    host.trim_end_matches('/').to_lowercase()
}

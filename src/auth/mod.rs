//
//  gerrit-rest
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials attached to every request of an authenticated session.
//!
//! Gerrit serves every REST endpoint twice: under `/a/...` for authenticated
//! callers and without the prefix for anonymous ones. Whether a
//! [`Credential`] is configured decides which family the session talks to.
//!
//! ## Supported Authentication Methods
//!
//! - **HTTP Basic**: username plus the HTTP password generated under
//!   *Settings → HTTP Credentials*. This is what most Gerrit sites expect.
//! - **Bearer token**: OAuth access tokens for sites running an OAuth provider.
//!
//! ## Example
//!
//! ```rust
//! use gerrit_rest::auth::Credential;
//!
//! let credential = Credential::basic("jdoe", "http-password");
//! assert_eq!(credential.username(), Some("jdoe"));
//! ```

use std::fmt;

use reqwest::blocking::RequestBuilder;

/// Credentials applied to outgoing requests.
///
/// # Variants
///
/// - `Basic`: HTTP Basic authentication with a Gerrit HTTP password.
/// - `Bearer`: Bearer token authentication.
///
/// # Notes
///
/// - Secrets are redacted from the `Debug` output.
/// - Which scheme a site accepts is decided by its administrator; the client
///   only forwards what it is given.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// HTTP Basic authentication.
    Basic {
        /// The Gerrit username.
        username: String,
        /// The HTTP password (not the account's login password).
        password: String,
    },
    /// Bearer token authentication.
    Bearer {
        /// The access token.
        token: String,
    },
}

impl Credential {
    /// Creates a Basic credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a Bearer credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Returns the username for Basic credentials.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Basic { username, .. } => Some(username),
            Self::Bearer { .. } => None,
        }
    }

    /// Applies the credential to an HTTP request.
    ///
    /// # Parameters
    ///
    /// - `request`: The [`RequestBuilder`] to add the `Authorization` header to.
    ///
    /// # Returns
    ///
    /// The modified [`RequestBuilder`].
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::Bearer { token } => request.bearer_auth(token),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let basic = format!("{:?}", Credential::basic("jdoe", "s3cret"));
        assert!(basic.contains("jdoe"));
        assert!(!basic.contains("s3cret"));

        let bearer = format!("{:?}", Credential::bearer("tok-123"));
        assert!(!bearer.contains("tok-123"));
    }

    #[test]
    fn test_basic_header_is_applied() {
        let client = reqwest::blocking::Client::new();
        let request = Credential::basic("jdoe", "s3cret")
            .apply_to_request(client.get("https://review.example.com/a/accounts/self"))
            .build()
            .unwrap();

        let header = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .unwrap()
            .to_str()
            .unwrap();
        // base64("jdoe:s3cret")
        assert_eq!(header, "Basic amRvZTpzM2NyZXQ=");
    }

    #[test]
    fn test_bearer_header_is_applied() {
        let client = reqwest::blocking::Client::new();
        let request = Credential::bearer("tok-123")
            .apply_to_request(client.get("https://review.example.com/a/accounts/self"))
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer tok-123"
        );
    }
}

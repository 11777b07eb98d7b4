//
//  gerrit-rest
//  api/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Verb Dispatcher
//!
//! The [`Session`] is the single HTTP entry point shared by every resource
//! object. It owns the reqwest client, the connection configuration and the
//! response cache, and exposes one method per HTTP verb with a uniform
//! contract:
//!
//! | Verb | Default headers | Result |
//! |------|-----------------|--------|
//! | [`get`](Session::get) | `Accept: application/json` | normalized [`Payload`] |
//! | [`get_raw`](Session::get_raw) | none | [`RawResponse`] |
//! | [`put`](Session::put) | `Content-Type: application/json` | [`RawResponse`] |
//! | [`post`](Session::post) | `Content-Type: application/json` | [`RawResponse`] |
//! | [`delete`](Session::delete) | `Accept: application/json` | [`RawResponse`] |
//!
//! ## Authenticated Paths
//!
//! Paths are written in Gerrit's authenticated family (`a/changes/...`). When
//! the connection has no credential the leading `a/` segment is dropped so the
//! anonymous endpoint is used instead.
//!
//! ## Errors
//!
//! Any non-2xx response fails with [`ApiError::Http`] carrying the status, the
//! URL and the body. Connection failures that outlive the retry policy fail
//! with [`ApiError::Transport`].

use std::thread;

use reqwest::blocking::{Client, Request, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, warn};

use super::cache::{request_signature, ResponseCache};
use super::common::{ApiError, Query, Result};
use super::response::{normalize_body, Payload, RawResponse};
use crate::config::{base_url, ConnectionConfig};

fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

/// Removes the leading authenticated-family segment from `path`.
///
/// Only a first segment equal to `a` is removed; later segments named `a`
/// belong to the resource path.
///
/// # Example
///
/// ```rust
/// use gerrit_rest::api::session::strip_auth_prefix;
///
/// assert_eq!(strip_auth_prefix("a/changes/1"), "changes/1");
/// assert_eq!(strip_auth_prefix("a/projects/a/b"), "projects/a/b");
/// assert_eq!(strip_auth_prefix("changes/a/1"), "changes/a/1");
/// ```
pub fn strip_auth_prefix(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    if path == "a" {
        ""
    } else {
        path.strip_prefix("a/").unwrap_or(path)
    }
}

/// Shared HTTP session of one Gerrit connection.
///
/// Created once by [`GerritClient`](crate::api::GerritClient) and shared by
/// every resource object through an `Arc`. The session is `Send + Sync`; the
/// response cache is the only state mutated after construction.
///
/// # Example
///
/// ```rust,no_run
/// use gerrit_rest::api::common::Query;
/// use gerrit_rest::api::session::Session;
/// use gerrit_rest::config::ConnectionConfig;
///
/// let session = Session::new(ConnectionConfig::new("https://review.example.com"))?;
/// let changes = session.get("a/changes/", &Query::new().q("status:open").limit(5))?;
/// # Ok::<(), gerrit_rest::api::common::ApiError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    /// The underlying HTTP client
    http: Client,
    /// Connection configuration, unchanged after construction
    config: ConnectionConfig,
    /// Validated host URL ending with `/`
    base_url: String,
    /// Response cache, present when the cache policy is enabled
    cache: Option<ResponseCache>,
}

impl Session {
    /// Creates a session for the configured host.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidHost`] when the host is not an http(s) URL,
    /// or [`ApiError::Transport`] when the HTTP client cannot be built.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        let base_url = base_url(&config.host)?;
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(!config.verify)
            .timeout(config.timeout)
            .build()?;
        let cache = config
            .cache
            .enabled
            .then(|| ResponseCache::new(config.cache.expire_after));

        debug!(
            "Session for {} (authenticated: {}, cache: {})",
            base_url,
            config.is_authenticated(),
            cache.is_some()
        );

        Ok(Self {
            http,
            config,
            base_url,
            cache,
        })
    }

    /// Returns the connection configuration.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Returns the base URL, always ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the absolute URL for an authenticated-family path.
    ///
    /// Without a credential the leading `a/` segment is removed first.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let path = if self.config.is_authenticated() {
            path
        } else {
            strip_auth_prefix(path)
        };
        format!("{}{}", self.base_url, path)
    }

    /// Issues a GET and normalizes the JSON response.
    ///
    /// # Parameters
    ///
    /// * `path` - Authenticated-family path such as `a/changes/12345/detail`
    /// * `query` - Query parameters forwarded verbatim, repeated keys included
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] for a non-2xx status and
    /// [`ApiError::MalformedResponse`] when the body is not JSON.
    pub fn get(&self, path: &str, query: &Query) -> Result<Payload> {
        let request = self.request(Method::GET, path, query).header(ACCEPT, application_json());
        let response = self.send(request)?;
        normalize_body(&response.url, &response.body)
    }

    /// Issues a GET without default headers and returns the response as received.
    ///
    /// Used for endpoints that answer with plain text, base64 content or
    /// archives rather than JSON.
    pub fn get_raw(&self, path: &str, query: &Query) -> Result<RawResponse> {
        self.send(self.request(Method::GET, path, query))
    }

    /// Issues a PUT with `body` sent as-is.
    ///
    /// `Content-Type: application/json` is set unless `headers` overrides it;
    /// other entries of `headers` are added to the request.
    pub fn put(&self, path: &str, body: Vec<u8>, headers: Option<HeaderMap>) -> Result<RawResponse> {
        let mut request = self
            .request(Method::PUT, path, &Query::new())
            .header(CONTENT_TYPE, application_json())
            .body(body);
        if let Some(headers) = headers {
            request = request.headers(headers);
        }
        self.send(request)
    }

    /// Issues a PUT with `payload` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialize`] when the payload cannot be serialized.
    pub fn put_json<P: Serialize + ?Sized>(&self, path: &str, payload: &P) -> Result<RawResponse> {
        let body = serde_json::to_vec(payload).map_err(ApiError::Serialize)?;
        self.put(path, body, None)
    }

    /// Issues a POST with an optional JSON payload.
    ///
    /// POST is never retried. The response is returned unprocessed; call
    /// [`RawResponse::normalize`] for endpoints that answer with JSON.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gerrit_rest::api::session::Session;
    /// use gerrit_rest::config::ConnectionConfig;
    /// use serde_json::json;
    ///
    /// let session = Session::new(ConnectionConfig::new("https://review.example.com"))?;
    /// session.post("a/changes/12345/abandon", Some(&json!({"message": "stale"})))?;
    /// session.post::<serde_json::Value>("a/changes/12345/restore", None)?;
    /// # Ok::<(), gerrit_rest::api::common::ApiError>(())
    /// ```
    pub fn post<P: Serialize + ?Sized>(&self, path: &str, payload: Option<&P>) -> Result<RawResponse> {
        let mut request = self
            .request(Method::POST, path, &Query::new())
            .header(CONTENT_TYPE, application_json());
        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload).map_err(ApiError::Serialize)?;
            request = request.body(body);
        }
        self.send(request)
    }

    /// Issues a DELETE.
    pub fn delete(&self, path: &str) -> Result<RawResponse> {
        let request = self
            .request(Method::DELETE, path, &Query::new())
            .header(ACCEPT, application_json());
        self.send(request)
    }

    /// Drops every cached response.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Number of cached responses, zero when caching is disabled.
    pub fn cached_responses(&self) -> usize {
        self.cache.as_ref().map_or(0, ResponseCache::len)
    }

    fn request(&self, method: Method, path: &str, query: &Query) -> RequestBuilder {
        let url = self.url_for(path);
        let mut request = self.http.request(method, url);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if let Some(credential) = &self.config.credential {
            request = credential.apply_to_request(request);
        }
        request
    }

    fn send(&self, request: RequestBuilder) -> Result<RawResponse> {
        let request = request.build()?;
        debug!("{} {}", request.method(), request.url());

        let cache_key = match &self.cache {
            Some(_) if request.method() == Method::GET => Some(request_signature(&request)),
            _ => None,
        };
        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(hit) = cache.get(key) {
                debug!("Cache hit: {}", key);
                return Ok(hit);
            }
        }

        let response = read_response(self.execute(request)?)?;
        if !response.status.is_success() {
            debug!("{} from {}", response.status, response.url);
            return Err(ApiError::Http {
                status: response.status,
                url: response.url.clone(),
                body: response.text(),
            });
        }

        if let (Some(cache), Some(key)) = (&self.cache, cache_key) {
            cache.insert(key, response.clone());
        }
        Ok(response)
    }

    /// Executes `request`, retrying per the connection's retry policy.
    ///
    /// Retried attempts send clones; the final attempt sends the original
    /// request and its outcome is returned as-is.
    fn execute(&self, request: Request) -> Result<Response> {
        let policy = &self.config.retry;
        let retryable = policy.allows(request.method());
        let mut retries = 0;

        loop {
            let attempt = if retryable && retries < policy.total {
                request.try_clone()
            } else {
                None
            };
            let Some(attempt) = attempt else {
                return Ok(self.http.execute(request)?);
            };

            match self.http.execute(attempt) {
                Ok(response) if policy.retries_status(response.status()) => {
                    warn!("{} {} returned {}, retrying", request.method(), request.url(), response.status());
                }
                Ok(response) => return Ok(response),
                Err(e) if e.is_connect() || e.is_timeout() => {
                    warn!("{} {} failed: {}, retrying", request.method(), request.url(), e);
                }
                Err(e) => return Err(e.into()),
            }

            retries += 1;
            thread::sleep(policy.backoff(retries));
        }
    }
}

fn read_response(response: Response) -> Result<RawResponse> {
    let url = response.url().to_string();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes()?.to_vec();
    Ok(RawResponse {
        url,
        status,
        headers,
        body,
    })
}

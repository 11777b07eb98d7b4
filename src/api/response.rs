//
//  gerrit-rest
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Normalizer
//!
//! Gerrit prefixes every JSON body with `)]}'` and a newline so the response
//! cannot be executed as a script by a hostile page. This module strips that
//! marker and turns the remaining body into a [`Payload`].
//!
//! Two shapes leave the dispatcher:
//!
//! - [`Payload`] - normalized JSON (or [`Payload::Empty`] for an empty body)
//! - [`RawResponse`] - the unprocessed response, used for downloads, base64
//!   content and every mutating verb
//!
//! ## Example
//!
//! ```rust
//! use gerrit_rest::api::response::normalize_body;
//!
//! let payload = normalize_body("https://review.example.com/a/changes/1", b")]}'\n{\"branch\":\"master\"}").unwrap();
//! assert_eq!(payload.get("branch").and_then(|v| v.as_str()), Some("master"));
//! ```

use base64::Engine;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::common::{ApiError, Result};

/// The anti-hijacking marker Gerrit prepends to JSON bodies.
pub const XSSI_PREFIX: &[u8] = b")]}'\n";

/// Removes the anti-hijacking marker from the start of `body`, if present.
///
/// Only a leading marker is removed; the same bytes elsewhere in the body are
/// content.
pub fn strip_xssi_prefix(body: &[u8]) -> &[u8] {
    body.strip_prefix(XSSI_PREFIX).unwrap_or(body)
}

/// Normalized body of a JSON endpoint.
///
/// Objects keep their exact field names and order, arrays keep element order,
/// and scalars map to their natural JSON equivalents. Nothing is added or
/// dropped, so re-serializing the value reproduces the original document.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The server returned an empty body.
    Empty,

    /// The parsed JSON document.
    Value(Value),
}

impl Payload {
    /// Looks up a field of a top-level object.
    ///
    /// Returns `None` for missing fields, non-object payloads and [`Payload::Empty`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_value().and_then(|v| v.get(key))
    }

    /// Looks up a nested value with a JSON pointer such as `/revisions/abc/kind`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.as_value().and_then(|v| v.pointer(pointer))
    }

    /// Borrows the parsed document, if there is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Empty => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Consumes the payload, mapping [`Payload::Empty`] to `Value::Null`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Value(v) => v,
        }
    }

    /// Checks whether the server returned an empty body.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Deserializes the payload into a typed record.
    ///
    /// An empty payload deserializes from `null`, so it only succeeds for
    /// `Option` or unit-like targets.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the document does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.into_value()).map_err(ApiError::Decode)
    }
}

/// Normalizes a response body received from `url`.
///
/// The marker is stripped first; an empty remainder yields [`Payload::Empty`]
/// without attempting to parse.
///
/// # Errors
///
/// Returns [`ApiError::MalformedResponse`] with the URL and raw body when a
/// non-empty body is not valid JSON.
pub fn normalize_body(url: &str, body: &[u8]) -> Result<Payload> {
    let body = strip_xssi_prefix(body);
    if body.is_empty() {
        tracing::trace!("Empty body from {}", url);
        return Ok(Payload::Empty);
    }

    serde_json::from_slice(body)
        .map(Payload::Value)
        .map_err(|source| ApiError::MalformedResponse {
            url: url.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
            source,
        })
}

/// A response as received from the server, body fully read.
///
/// Returned by raw GETs and by PUT, POST and DELETE. Nothing has been stripped
/// or parsed.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Final URL of the request.
    pub url: String,
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Returns the body as UTF-8 text, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Applies the response normalizer to this body.
    ///
    /// POST endpoints such as `cherrypick` or `create` answer with a JSON
    /// document; this turns it into a [`Payload`] after the fact.
    pub fn normalize(&self) -> Result<Payload> {
        normalize_body(&self.url, &self.body)
    }

    /// Decodes a base64 body.
    ///
    /// File content endpoints return the file base64-encoded as plain text.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ContentDecode`] when the body is not valid base64.
    pub fn decode_base64(&self) -> Result<Vec<u8>> {
        let text = self.body.trim_ascii();
        base64::engine::general_purpose::STANDARD
            .decode(text)
            .map_err(|source| ApiError::ContentDecode {
                url: self.url.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    const URL: &str = "https://review.example.com/a/changes/1";

    fn raw(body: &[u8]) -> RawResponse {
        RawResponse {
            url: URL.to_string(),
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_prefixed_body_is_parsed() {
        let payload = normalize_body(URL, b")]}'\n{\"branch\":\"master\"}").unwrap();
        assert_eq!(payload.get("branch"), Some(&json!("master")));
    }

    #[test]
    fn test_unprefixed_body_is_parsed() {
        let payload = normalize_body(URL, b"[1, 2, 3]").unwrap();
        assert_eq!(payload.into_value(), json!([1, 2, 3]));
    }

    #[test]
    fn test_only_leading_marker_is_stripped() {
        let payload = normalize_body(URL, b")]}'\n\")]}'\\n\"").unwrap();
        assert_eq!(payload.into_value(), json!(")]}'\n"));
    }

    #[test]
    fn test_empty_bodies() {
        assert!(normalize_body(URL, b"").unwrap().is_empty());
        assert!(normalize_body(URL, XSSI_PREFIX).unwrap().is_empty());
        assert_eq!(Payload::Empty.into_value(), Value::Null);
    }

    #[test]
    fn test_malformed_body_keeps_context() {
        let err = normalize_body(URL, b")]}'\nnot json").unwrap_err();
        match err {
            ApiError::MalformedResponse { url, body, .. } => {
                assert_eq!(url, URL);
                assert_eq!(body, "not json");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_round_trip_preserves_fields_and_order() {
        let original = r#"{"zeta":1,"alpha":{"nested":[true,null,"x"]},"_number":42,"mid":1.5}"#;
        let mut body = XSSI_PREFIX.to_vec();
        body.extend_from_slice(original.as_bytes());

        let payload = normalize_body(URL, &body).unwrap();
        assert_eq!(serde_json::to_string(&payload.into_value()).unwrap(), original);
    }

    #[test]
    fn test_pointer_and_deserialize() {
        #[derive(Deserialize)]
        struct Info {
            branch: String,
            #[serde(rename = "_number")]
            number: u64,
        }

        let payload = normalize_body(
            URL,
            br#")]}'
{"branch":"main","_number":7,"labels":{"Code-Review":{"approved":{}}}}"#,
        )
        .unwrap();
        assert!(payload.pointer("/labels/Code-Review/approved").is_some());

        let info: Info = payload.deserialize().unwrap();
        assert_eq!(info.branch, "main");
        assert_eq!(info.number, 7);
    }

    #[test]
    fn test_deserialize_shape_mismatch() {
        let payload = Payload::Value(json!({"branch": 1}));
        let err = payload.deserialize::<Vec<String>>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_raw_response_helpers() {
        let response = raw(b"aGVsbG8gd29ybGQ=\n");
        assert_eq!(response.decode_base64().unwrap(), b"hello world");
        assert_eq!(response.text(), "aGVsbG8gd29ybGQ=\n");

        let json = raw(b")]}'\n{\"_number\":3}");
        assert_eq!(json.normalize().unwrap().get("_number"), Some(&json!(3)));

        assert!(matches!(
            raw(b"%%%").decode_base64(),
            Err(ApiError::ContentDecode { .. })
        ));
    }
}

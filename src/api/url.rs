//
//  gerrit-rest
//  api/url.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # URL Builder
//!
//! Path construction helpers shared by every resource type.
//!
//! Gerrit identifiers routinely contain reserved characters: file paths carry
//! `/`, change ids may be `project~branch~Change-Id` triplets, and project names
//! nest with `/`. Each identity value is therefore percent-encoded as one opaque
//! path segment before it is substituted into a template.
//!
//! ## Example
//!
//! ```rust
//! use gerrit_rest::api::url::{format_template, join_segments};
//!
//! let path = format_template(
//!     "changes/{}/revisions/{}/files/{}",
//!     &["123", "current", "a/b.txt"],
//! ).unwrap();
//! assert_eq!(path, "changes/123/revisions/current/files/a%2Fb.txt");
//!
//! assert_eq!(join_segments(&["a/changes/", "/123/", "detail"]), "a/changes/123/detail");
//! ```

use super::common::{ApiError, Result};

/// Placeholder marking one positional value in an endpoint template.
pub const PLACEHOLDER: &str = "{}";

/// Joins path segments with exactly one `/` between them.
///
/// Runs of separators are collapsed, both at segment boundaries and inside a
/// segment, and segments that end up empty are skipped. The `scheme://` prefix
/// of a leading base URL is kept as is. A trailing `/` is kept only when the
/// final input segment ends with one, because Gerrit distinguishes `changes/`
/// (list) from `changes` (not found).
///
/// # Example
///
/// ```rust
/// use gerrit_rest::api::url::join_segments;
///
/// assert_eq!(join_segments(&["https://review.example.com/", "a/changes/"]), "https://review.example.com/a/changes/");
/// assert_eq!(join_segments(&["a/changes/1", ""]), "a/changes/1");
/// assert_eq!(join_segments(&["a//changes", "1"]), "a/changes/1");
/// ```
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut scheme = "";
    let mut pieces = Vec::new();
    for (index, segment) in segments.iter().enumerate() {
        let mut segment = segment.as_ref();
        if index == 0 {
            if let Some(at) = segment.find("://") {
                scheme = &segment[..at + 3];
                segment = &segment[at + 3..];
            }
        }
        pieces.extend(segment.split('/').filter(|piece| !piece.is_empty()));
    }

    let mut joined = format!("{}{}", scheme, pieces.join("/"));
    if segments
        .last()
        .is_some_and(|last| last.as_ref().ends_with('/'))
    {
        joined.push('/');
    }

    joined
}

/// Percent-encodes a value so it forms exactly one path segment.
///
/// Only RFC 3986 unreserved characters (`A-Z a-z 0-9 - _ . ~`) stay literal;
/// every reserved character, including `/`, `?` and `#`, is escaped.
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Percent-encodes every `/`-separated piece of a path, keeping the separators.
///
/// Used where the server expects a real multi-segment path, such as the gitiles
/// plugin's `{project}/+log/{commit}/{file}` routes.
pub fn encode_path(value: &str) -> String {
    value
        .split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Fills the `{}` placeholders of `template` with percent-encoded `values`.
///
/// Values are substituted positionally. Each value is encoded with
/// [`encode_segment`], so a value containing `/` still occupies one segment.
///
/// # Errors
///
/// Returns [`ApiError::ArgumentMismatch`] when the number of placeholders
/// differs from the number of values.
///
/// # Example
///
/// ```rust
/// use gerrit_rest::api::url::format_template;
///
/// assert_eq!(format_template("a/changes/{}", &[""]).unwrap(), "a/changes/");
/// assert!(format_template("a/changes/{}", &["1", "2"]).is_err());
/// ```
pub fn format_template<S: AsRef<str>>(template: &str, values: &[S]) -> Result<String> {
    let expected = template.matches(PLACEHOLDER).count();
    if expected != values.len() {
        return Err(ApiError::ArgumentMismatch {
            template: template.to_string(),
            expected,
            supplied: values.len(),
        });
    }

    let mut pieces = template.split(PLACEHOLDER);
    let mut out = String::with_capacity(template.len());
    if let Some(head) = pieces.next() {
        out.push_str(head);
    }
    for (value, piece) in values.iter().zip(pieces) {
        out.push_str(&encode_segment(value.as_ref()));
        out.push_str(piece);
    }

    Ok(out)
}

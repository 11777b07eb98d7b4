//
//  gerrit-rest
//  api/changes/edit.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Change edits: the caller's pending, unpublished modifications of a change.
//!
//! Publishing and rebasing an edit are change-level actions
//! (`/changes/{id}/edit:publish`), so they hang off [`ChangeEdits`] and never
//! off a single file.
//!
//! # Example
//!
//! ```rust,no_run
//! use gerrit_rest::api::GerritClient;
//! use gerrit_rest::config::ConnectionConfig;
//!
//! let client = GerritClient::new(ConnectionConfig::new("https://review.example.com"))?;
//! let edits = client.changes().id("12345").edits();
//!
//! edits.file("README.md").put(b"# Title\n".to_vec())?;
//! edits.publish(None)?;
//! # Ok::<(), gerrit_rest::api::common::ApiError>(())
//! ```

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::{json, Value};

use super::Change;
use crate::api::common::{Query, Result};
use crate::api::resource::{Descriptor, Resource};
use crate::api::response::{Payload, RawResponse};
use crate::api::session::Session;

/// The change edit of a change.
#[derive(Debug, Clone)]
pub struct ChangeEdits {
    change: Change,
}

impl Resource for ChangeEdits {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "ChangeEdits",
        template: "a/changes/{}/edit",
        identity: &["id"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        self.change.attribute(name)
    }

    fn session(&self) -> &Session {
        self.change.session()
    }
}

impl ChangeEdits {
    pub(crate) fn new(change: Change) -> Self {
        Self { change }
    }

    /// `GET /changes/{id}/edit`.
    ///
    /// Answers `204 No Content`, normalized to an empty payload, when no edit
    /// exists.
    pub fn info(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("", query)
    }

    /// `POST /changes/{id}/edit:publish`.
    ///
    /// `input` is a `PublishChangeEditInput` document, such as
    /// `{"notify": "NONE"}`.
    pub fn publish(&self, input: Option<&Value>) -> Result<RawResponse> {
        self.change.post_endpoint("edit:publish", input)
    }

    /// `POST /changes/{id}/edit:rebase`: rebases the edit onto the latest patch set.
    pub fn rebase(&self) -> Result<RawResponse> {
        self.change.post_endpoint::<Value>("edit:rebase", None)
    }

    /// `POST /changes/{id}/edit`: restores a file deleted in the edit.
    pub fn restore(&self, path: &str) -> Result<RawResponse> {
        self.post_endpoint("", Some(&json!({ "restore_path": path })))
    }

    /// `DELETE /changes/{id}/edit`: drops the whole edit.
    pub fn delete(&self) -> Result<RawResponse> {
        self.delete_endpoint("")
    }

    /// Binds a file path within the edit.
    pub fn file(&self, file_id: impl Into<String>) -> ChangeEditFile {
        ChangeEditFile {
            change: self.change.clone(),
            file_id: file_id.into(),
        }
    }
}

/// One file of the change edit.
#[derive(Debug, Clone)]
pub struct ChangeEditFile {
    change: Change,
    file_id: String,
}

impl Resource for ChangeEditFile {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "ChangeEditFile",
        template: "a/changes/{}/edit/{}",
        identity: &["id", "file_id"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "file_id" => Some(self.file_id.as_str()),
            _ => self.change.attribute(name),
        }
    }

    fn session(&self) -> &Session {
        self.change.session()
    }
}

impl ChangeEditFile {
    /// `GET /changes/{id}/edit/{file}`: the file content, base64-encoded.
    pub fn retrieve(&self, query: &Query) -> Result<RawResponse> {
        self.get_raw_endpoint("", query)
    }

    /// `PUT /changes/{id}/edit/{file}`: replaces the file content.
    ///
    /// The content is sent as `application/octet-stream`.
    pub fn put(&self, content: Vec<u8>) -> Result<RawResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/octet-stream"));
        self.put_endpoint("", content, Some(headers))
    }

    /// `DELETE /changes/{id}/edit/{file}`: deletes the file in the edit.
    pub fn delete(&self) -> Result<RawResponse> {
        self.delete_endpoint("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::config::ConnectionConfig;

    fn edits() -> ChangeEdits {
        let session = Session::new(ConnectionConfig::new("https://review.example.com")).unwrap();
        ChangeEdits::new(Change {
            session: Arc::new(session),
            id: "12345".to_string(),
        })
    }

    #[test]
    fn test_edit_paths() {
        let edits = edits();
        assert_eq!(edits.endpoint("").unwrap(), "a/changes/12345/edit");
        assert_eq!(
            edits.file("src/lib.rs").endpoint("").unwrap(),
            "a/changes/12345/edit/src%2Flib.rs"
        );
    }

    #[test]
    fn test_publish_is_change_level() {
        assert_eq!(
            edits().change.endpoint("edit:publish").unwrap(),
            "a/changes/12345/edit:publish"
        );
    }
}

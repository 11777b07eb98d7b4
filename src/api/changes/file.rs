//
//  gerrit-rest
//  api/changes/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! File endpoints of a revision, plus the gitiles history of a file.

use std::collections::BTreeMap;

use super::revision::{commit_sha, Revision};
use super::Change;
use crate::api::common::{Query, Result};
use crate::api::models::FileInfo;
use crate::api::resource::{Descriptor, Resource};
use crate::api::response::{Payload, RawResponse};
use crate::api::session::Session;
use crate::api::url::{encode_path, encode_segment};

/// One file of a revision, addressed by its path.
///
/// The path is a single identity value: `src/main.rs` is sent as
/// `src%2Fmain.rs`.
#[derive(Debug, Clone)]
pub struct RevisionFile {
    revision: Revision,
    file_id: String,
}

impl Resource for RevisionFile {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "RevisionFile",
        template: "a/changes/{}/revisions/{}/files/{}",
        identity: &["id", "revision_id", "file_id"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "file_id" => Some(self.file_id.as_str()),
            _ => self.revision.attribute(name),
        }
    }

    fn session(&self) -> &Session {
        self.revision.session()
    }
}

impl RevisionFile {
    pub(crate) fn new(revision: Revision, file_id: String) -> Self {
        Self { revision, file_id }
    }

    /// The file path this resource was bound to.
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// The revision this file belongs to.
    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    /// `GET .../files/{file}/content`, base64-decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ContentDecode`](crate::api::common::ApiError::ContentDecode)
    /// when the body is not base64.
    pub fn content(&self) -> Result<Vec<u8>> {
        self.get_raw_endpoint("content", &Query::new())?.decode_base64()
    }

    /// `GET .../files/{file}/diff`.
    ///
    /// Pass `base`, `context` or `whitespace` through `query`.
    pub fn diff(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("diff", query)
    }

    /// `GET .../files/{file}/download`: the file as a raw download.
    pub fn download(&self, query: &Query) -> Result<RawResponse> {
        self.get_raw_endpoint("download", query)
    }

    /// `GET .../files/{file}/blame`.
    pub fn blame(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("blame", query)
    }

    /// Checks whether Gerrit flags the file as binary.
    ///
    /// Reads the file's entry in the revision's files map. A file missing from
    /// the map, or an entry without the flag, is not binary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`](crate::api::common::ApiError::Decode) when
    /// the files map does not hold [`FileInfo`] records.
    pub fn is_binary(&self) -> Result<bool> {
        let files: BTreeMap<String, FileInfo> = self.revision.files(&Query::new())?.deserialize()?;
        Ok(files.get(&self.file_id).is_some_and(|info| info.binary))
    }

    /// History of the file through the gitiles plugin.
    ///
    /// `GET a/plugins/gitiles/{project}/+log/{commit}/{file}`. The project is
    /// read from the change and `commit` defaults to the revision's commit.
    /// `format=JSON` is added unless `query` already sets a format.
    pub fn get_history_log(&self, commit: Option<&str>, query: &Query) -> Result<Payload> {
        let change = Change {
            session: self.revision.shared_session(),
            id: self.revision.change_id().to_string(),
        };
        let project = change.change_info()?.project;
        let commit = match commit {
            Some(commit) => commit.to_string(),
            None => commit_sha(&self.revision.commit_info()?)?,
        };

        let path = format!(
            "a/plugins/gitiles/{}/+log/{}/{}",
            encode_path(&project),
            encode_segment(&commit),
            encode_path(&self.file_id)
        );
        let query = if query.values("format").next().is_some() {
            query.clone()
        } else {
            query.clone().param("format", "JSON")
        };
        self.session().get(&path, &query)
    }
}

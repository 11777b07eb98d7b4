//
//  gerrit-rest
//  api/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Gerrit REST entities and request inputs.
//!
//! Most operations return a [`Payload`](super::response::Payload) so callers
//! see every field the server sent. The records here cover the fields the
//! client itself relies on (parent resolution, binary detection) and are
//! available to callers through [`Payload::deserialize`](super::response::Payload::deserialize).
//!
//! Unknown fields are ignored when deserializing. Optional input fields are
//! omitted from the request body when unset.
//!
//! # Example
//!
//! ```rust
//! use gerrit_rest::api::models::ReviewInput;
//!
//! let review = ReviewInput::new()
//!     .message("Looks good")
//!     .label("Code-Review", 2);
//!
//! let body = serde_json::to_value(&review).unwrap();
//! assert_eq!(body["labels"]["Code-Review"], 2);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A change as returned by `GET /changes/{id}` and change queries.
///
/// # Fields
///
/// * `id` - Triplet id `project~branch~Change-Id`
/// * `number` - Legacy numeric id (`_number` on the wire)
/// * `project` - Project the change belongs to
/// * `branch` - Destination branch
/// * `change_id` - The `Change-Id` footer value
/// * `status` - `NEW`, `MERGED` or `ABANDONED`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeInfo {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "_number")]
    pub number: u64,

    pub project: String,

    pub branch: String,

    #[serde(default)]
    pub change_id: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub topic: Option<String>,

    /// Commit SHA of the current patch set, present when requested with
    /// `o=CURRENT_REVISION`.
    #[serde(default)]
    pub current_revision: Option<String>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub updated: Option<String>,
}

/// One parent of a commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParentCommit {
    /// SHA of the parent commit.
    pub commit: String,

    #[serde(default)]
    pub subject: Option<String>,
}

/// Author or committer identity of a commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitPerson {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// A commit as returned by `GET /changes/{id}/revisions/{rev}/commit`.
///
/// Gerrit fills in `commit` with the revision's SHA in that response. It stays
/// optional because some embedding entities leave it out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommitInfo {
    #[serde(default)]
    pub commit: Option<String>,

    #[serde(default)]
    pub parents: Vec<ParentCommit>,

    #[serde(default)]
    pub author: Option<GitPerson>,

    #[serde(default)]
    pub committer: Option<GitPerson>,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl CommitInfo {
    /// Checks whether this is a merge commit (exactly two parents).
    pub fn is_merge(&self) -> bool {
        self.parents.len() == 2
    }
}

/// Entry of the files map returned by `GET .../revisions/{rev}/files`.
///
/// Boolean flags are omitted by the server when false.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileInfo {
    /// Modification type: `A`, `D`, `R`, `C`, `W`; absent for modified files.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub binary: bool,

    #[serde(default)]
    pub old_path: Option<String>,

    #[serde(default)]
    pub lines_inserted: Option<u64>,

    #[serde(default)]
    pub lines_deleted: Option<u64>,

    #[serde(default)]
    pub size_delta: Option<i64>,

    #[serde(default)]
    pub size: Option<u64>,
}

/// Reference to the change owning a parent commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParentLink {
    /// Legacy numeric id of the change.
    pub number: u64,

    /// SHA of the parent commit, a revision of the linked change.
    pub revision: String,
}

/// Result of [`Revision::get_parent_info`](super::changes::Revision::get_parent_info).
///
/// `local` is the parent on the same branch as the revision's change, `remote`
/// the one merged in from another branch. A non-merge revision only has a
/// local parent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParentInfo {
    pub local: Option<ParentLink>,
    pub remote: Option<ParentLink>,
}

/// Input of `POST .../revisions/{rev}/review`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Votes keyed by label name, for example `Code-Review: 2`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Who to notify: `NONE`, `OWNER`, `OWNER_REVIEWERS` or `ALL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<String>,
}

impl ReviewInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the review message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a vote on `label`.
    pub fn label(mut self, label: impl Into<String>, value: i32) -> Self {
        self.labels.insert(label.into(), value);
        self
    }
}

/// Input of `PUT /changes/{id}/topic`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicInput {
    pub topic: String,
}

/// Input of `POST /changes/{id}/reviewers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewerInput {
    /// Account id, email, username or group name.
    pub reviewer: String,

    /// `REVIEWER` (default) or `CC`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Confirms adding a large group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
}

impl ReviewerInput {
    pub fn new(reviewer: impl Into<String>) -> Self {
        Self {
            reviewer: reviewer.into(),
            state: None,
            confirmed: None,
        }
    }
}

/// Input of `POST .../revisions/{rev}/cherrypick`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CherryPickInput {
    /// Destination branch.
    pub destination: String,

    /// Commit message of the cherry-picked change; defaults to the original.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl CherryPickInput {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            message: None,
            base: None,
        }
    }
}

/// Input of `POST /changes/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeInput {
    pub project: String,
    pub branch: String,
    pub subject: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// `NEW` by default; `DRAFT` on servers that still support drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_change: Option<String>,
}

impl ChangeInput {
    pub fn new(project: impl Into<String>, branch: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            branch: branch.into(),
            subject: subject.into(),
            topic: None,
            status: None,
            base_change: None,
        }
    }
}

/// Input of `POST /changes/{id}/hashtags`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashtagsInput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<String>,
}

/// Input of `POST /changes/{id}/rebase`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RebaseInput {
    /// Commit or change to rebase onto; the branch tip when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Message-only input of the abandon, restore and submit actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

//
//  gerrit-rest
//  api/changes/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Changes API: `/changes/` and everything below it.
//!
//! # Resource Hierarchy
//!
//! ```text
//! Changes                      a/changes/
//! └── Change                   a/changes/{id}
//!     ├── ChangeEdits          a/changes/{id}/edit
//!     │   └── ChangeEditFile   a/changes/{id}/edit/{file}
//!     ├── ChangeReviewers      a/changes/{id}/reviewers/
//!     │   └── ChangeReviewer   a/changes/{id}/reviewers/{account}
//!     └── Revision             a/changes/{id}/revisions/{rev}
//!         ├── RevisionFile     a/changes/{id}/revisions/{rev}/files/{file}
//!         └── RevisionReviewer a/changes/{id}/revisions/{rev}/reviewers/{account}
//! ```
//!
//! Child objects are created without any network traffic and share the
//! session of the client they came from.
//!
//! # Example
//!
//! ```rust,no_run
//! use gerrit_rest::api::GerritClient;
//! use gerrit_rest::api::common::Query;
//! use gerrit_rest::config::ConnectionConfig;
//!
//! let client = GerritClient::new(ConnectionConfig::new("https://review.example.com"))?;
//!
//! let open = client.changes().query(&Query::new().q("status:open").limit(10))?;
//! let change = client.changes().id("12345");
//! let files = change.current_revision().files(&Query::new())?;
//! # Ok::<(), gerrit_rest::api::common::ApiError>(())
//! ```
//!
//! # Notes
//!
//! - Change ids may be the numeric id, the `Change-Id`, or a
//!   `project~branch~Change-Id` triplet; they are percent-encoded as one
//!   path segment.
//! - Mutating operations return the raw response. Endpoints answering with
//!   JSON can be read with [`RawResponse::normalize`].

pub mod edit;
pub mod file;
pub mod reviewer;
pub mod revision;

pub use edit::*;
pub use file::*;
pub use reviewer::*;
pub use revision::*;

use std::sync::Arc;

use serde_json::Value;

use super::common::{Query, Result};
use super::models::{ActionInput, ChangeInfo, ChangeInput, HashtagsInput, RebaseInput, TopicInput};
use super::resource::{Descriptor, Resource};
use super::response::{Payload, RawResponse};
use super::session::Session;

/// Revision id Gerrit resolves to the latest patch set.
pub const CURRENT_REVISION: &str = "current";

/// The `/changes/` collection.
///
/// Obtained from [`GerritClient::changes`](crate::api::GerritClient::changes).
#[derive(Debug, Clone)]
pub struct Changes {
    session: Arc<Session>,
}

impl Resource for Changes {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "Changes",
        template: "a/changes/",
        identity: &[],
    };

    fn attribute(&self, _name: &str) -> Option<&str> {
        None
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl Changes {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Queries changes.
    ///
    /// # Parameters
    ///
    /// * `query` - Search parameters: `q`, `n`, `S`, repeated `o` options and
    ///   flags such as `no-limit`
    ///
    /// # Returns
    ///
    /// The list of `ChangeInfo` entities, or a list of lists when several `q`
    /// parameters are given.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gerrit_rest::api::GerritClient;
    /// use gerrit_rest::api::common::Query;
    /// use gerrit_rest::config::ConnectionConfig;
    ///
    /// let client = GerritClient::new(ConnectionConfig::new("https://review.example.com"))?;
    /// let merged = client.changes().query(
    ///     &Query::new()
    ///         .q("owner:self status:merged")
    ///         .flag("no-limit")
    ///         .option("CURRENT_REVISION")
    ///         .option("CURRENT_COMMIT"),
    /// )?;
    /// # Ok::<(), gerrit_rest::api::common::ApiError>(())
    /// ```
    pub fn query(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("", query)
    }

    /// Runs a single search expression and decodes the result.
    ///
    /// The current revision is requested so each entry carries
    /// `current_revision`.
    pub fn search(&self, expression: &str) -> Result<Vec<ChangeInfo>> {
        let query = Query::new().q(expression).option("CURRENT_REVISION");
        self.query(&query)?.deserialize()
    }

    /// Creates a new change.
    pub fn create(&self, input: &ChangeInput) -> Result<RawResponse> {
        self.post_endpoint("", Some(input))
    }

    /// Binds a change id, producing the change resource.
    pub fn id(&self, id: impl Into<String>) -> Change {
        Change {
            session: Arc::clone(&self.session),
            id: id.into(),
        }
    }
}

/// A single change, addressed by `id`.
#[derive(Debug, Clone)]
pub struct Change {
    session: Arc<Session>,
    id: String,
}

impl Resource for Change {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "Change",
        template: "a/changes/{}",
        identity: &["id"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        (name == "id").then_some(self.id.as_str())
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl Change {
    /// The change id this resource was bound to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `GET /changes/{id}`.
    pub fn info(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("", query)
    }

    /// `GET /changes/{id}` decoded into a [`ChangeInfo`].
    pub fn change_info(&self) -> Result<ChangeInfo> {
        self.info(&Query::new())?.deserialize()
    }

    /// `GET /changes/{id}/detail`: the change with labels, reviewers and messages.
    pub fn detail(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("detail", query)
    }

    /// `GET /changes/{id}/topic`.
    pub fn topic(&self) -> Result<Payload> {
        self.get_endpoint("topic", &Query::new())
    }

    /// `PUT /changes/{id}/topic`.
    pub fn set_topic(&self, topic: impl Into<String>) -> Result<RawResponse> {
        self.put_json_endpoint("topic", &TopicInput { topic: topic.into() })
    }

    /// `DELETE /changes/{id}/topic`.
    pub fn delete_topic(&self) -> Result<RawResponse> {
        self.delete_endpoint("topic")
    }

    /// `GET /changes/{id}/submitted_together`.
    pub fn submitted_together(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("submitted_together", query)
    }

    /// `GET /changes/{id}/in`: branches and tags the change was merged into.
    pub fn included_in(&self) -> Result<Payload> {
        self.get_endpoint("in", &Query::new())
    }

    /// `GET /changes/{id}/comments`: published comments of all revisions.
    pub fn comments(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("comments", query)
    }

    /// `GET /changes/{id}/robotcomments`.
    pub fn robot_comments(&self) -> Result<Payload> {
        self.get_endpoint("robotcomments", &Query::new())
    }

    /// `GET /changes/{id}/drafts`: the caller's draft comments.
    pub fn drafts(&self) -> Result<Payload> {
        self.get_endpoint("drafts", &Query::new())
    }

    /// `GET /changes/{id}/check`: consistency check of the change.
    pub fn check(&self) -> Result<Payload> {
        self.get_endpoint("check", &Query::new())
    }

    /// `GET /changes/{id}/hashtags`.
    pub fn hashtags(&self) -> Result<Payload> {
        self.get_endpoint("hashtags", &Query::new())
    }

    /// `POST /changes/{id}/hashtags`.
    pub fn set_hashtags(&self, input: &HashtagsInput) -> Result<RawResponse> {
        self.post_endpoint("hashtags", Some(input))
    }

    /// `POST /changes/{id}/rebase`.
    pub fn rebase(&self, input: Option<&RebaseInput>) -> Result<RawResponse> {
        self.post_endpoint("rebase", input)
    }

    /// `POST /changes/{id}/merge`: creates a merge patch set.
    ///
    /// `input` is a `MergePatchSetInput` document.
    pub fn merge(&self, input: &Value) -> Result<RawResponse> {
        self.post_endpoint("merge", Some(input))
    }

    /// `POST /changes/{id}/abandon`.
    pub fn abandon(&self, message: Option<&str>) -> Result<RawResponse> {
        self.post_endpoint("abandon", Some(&action(message)))
    }

    /// `POST /changes/{id}/restore`.
    pub fn restore(&self, message: Option<&str>) -> Result<RawResponse> {
        self.post_endpoint("restore", Some(&action(message)))
    }

    /// `POST /changes/{id}/submit`.
    pub fn submit(&self) -> Result<RawResponse> {
        self.post_endpoint::<Value>("submit", None)
    }

    /// `DELETE /changes/{id}`: deletes a new or abandoned change.
    pub fn delete_change(&self) -> Result<RawResponse> {
        self.delete_endpoint("")
    }

    /// Checks whether the current revision is a merge commit.
    ///
    /// Fetches the current revision's commit; a commit with exactly two
    /// parents is a merge.
    pub fn is_merge(&self) -> Result<bool> {
        Ok(self.current_revision().commit_info()?.is_merge())
    }

    /// Binds a revision id: a commit SHA, a patch set number or `current`.
    pub fn revision(&self, revision_id: impl Into<String>) -> Revision {
        Revision::new(Arc::clone(&self.session), self.id.clone(), revision_id.into())
    }

    /// The latest patch set of the change.
    pub fn current_revision(&self) -> Revision {
        self.revision(CURRENT_REVISION)
    }

    /// The change edit of the caller.
    pub fn edits(&self) -> ChangeEdits {
        ChangeEdits::new(self.clone())
    }

    /// The reviewers of the change.
    pub fn reviewers(&self) -> ChangeReviewers {
        ChangeReviewers::new(self.clone())
    }
}

fn action(message: Option<&str>) -> ActionInput {
    ActionInput {
        message: message.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;

    fn changes() -> Changes {
        let session = Session::new(ConnectionConfig::new("https://review.example.com")).unwrap();
        Changes::new(Arc::new(session))
    }

    #[test]
    fn test_collection_path_keeps_trailing_slash() {
        assert_eq!(changes().endpoint("").unwrap(), "a/changes/");
    }

    #[test]
    fn test_change_paths() {
        let change = changes().id("demo~master~I8473b95934b5732ac55d26311a706c9c2bde9940");
        assert_eq!(
            change.endpoint("").unwrap(),
            "a/changes/demo~master~I8473b95934b5732ac55d26311a706c9c2bde9940"
        );
        assert_eq!(changes().id("12345").endpoint("in").unwrap(), "a/changes/12345/in");
    }

    #[test]
    fn test_children_inherit_identity() {
        let change = changes().id("12345");
        assert_eq!(
            change.current_revision().endpoint("commit").unwrap(),
            "a/changes/12345/revisions/current/commit"
        );
        assert_eq!(change.edits().endpoint("").unwrap(), "a/changes/12345/edit");
        assert_eq!(change.reviewers().endpoint("").unwrap(), "a/changes/12345/reviewers/");
    }

    #[test]
    fn test_change_id_with_slash_stays_one_segment() {
        assert_eq!(
            changes().id("my/project~main~I1").endpoint("detail").unwrap(),
            "a/changes/my%2Fproject~main~I1/detail"
        );
    }
}

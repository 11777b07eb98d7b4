//
//  gerrit-rest
//  api/changes/revision.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Revision (patch set) endpoints and revision-level reviewers.

use std::sync::Arc;

use serde::de::Error as _;

use super::file::RevisionFile;
use super::Changes;
use crate::api::common::{ApiError, Query, Result};
use crate::api::models::{ChangeInfo, CherryPickInput, CommitInfo, ParentCommit, ParentInfo, ParentLink, ReviewInput};
use crate::api::resource::{Descriptor, Resource};
use crate::api::response::{Payload, RawResponse};
use crate::api::session::Session;
use crate::api::url::encode_segment;

/// One revision of a change, addressed by change id and revision id.
///
/// # Example
///
/// ```rust,no_run
/// use gerrit_rest::api::GerritClient;
/// use gerrit_rest::api::common::Query;
/// use gerrit_rest::api::models::ReviewInput;
/// use gerrit_rest::config::ConnectionConfig;
///
/// let client = GerritClient::new(ConnectionConfig::new("https://review.example.com"))?;
/// let revision = client.changes().id("12345").current_revision();
///
/// let commit = revision.commit_info()?;
/// println!("{} parent(s)", commit.parents.len());
///
/// revision.set_review(&ReviewInput::new().message("LGTM").label("Code-Review", 2))?;
/// # Ok::<(), gerrit_rest::api::common::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Revision {
    session: Arc<Session>,
    id: String,
    revision_id: String,
}

impl Resource for Revision {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "Revision",
        template: "a/changes/{}/revisions/{}",
        identity: &["id", "revision_id"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(self.id.as_str()),
            "revision_id" => Some(self.revision_id.as_str()),
            _ => None,
        }
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl Revision {
    pub(crate) fn new(session: Arc<Session>, id: String, revision_id: String) -> Self {
        Self {
            session,
            id,
            revision_id,
        }
    }

    /// The change id of this revision.
    pub fn change_id(&self) -> &str {
        &self.id
    }

    /// The revision id this resource was bound to.
    pub fn revision_id(&self) -> &str {
        &self.revision_id
    }

    pub(crate) fn shared_session(&self) -> Arc<Session> {
        Arc::clone(&self.session)
    }

    /// `GET .../revisions/{rev}/commit`.
    pub fn commit(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("commit", query)
    }

    /// `GET .../revisions/{rev}/commit` decoded into a [`CommitInfo`].
    pub fn commit_info(&self) -> Result<CommitInfo> {
        self.commit(&Query::new())?.deserialize()
    }

    /// `GET .../revisions/{rev}/actions`.
    pub fn actions(&self) -> Result<Payload> {
        self.get_endpoint("actions", &Query::new())
    }

    /// `GET .../revisions/{rev}/review`: the change with the revision's labels.
    pub fn review(&self) -> Result<Payload> {
        self.get_endpoint("review", &Query::new())
    }

    /// `POST .../revisions/{rev}/review`: votes and comments on the revision.
    pub fn set_review(&self, input: &ReviewInput) -> Result<RawResponse> {
        self.post_endpoint("review", Some(input))
    }

    /// `GET .../revisions/{rev}/related`.
    pub fn related(&self) -> Result<Payload> {
        self.get_endpoint("related", &Query::new())
    }

    /// `GET .../revisions/{rev}/patch`.
    ///
    /// The patch comes back base64-encoded, or as an archive when `zip` or
    /// `download` is passed in `query`; the response is returned unprocessed.
    pub fn patch(&self, query: &Query) -> Result<RawResponse> {
        self.get_raw_endpoint("patch", query)
    }

    /// `GET .../revisions/{rev}/mergeable`.
    pub fn mergeable(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("mergeable", query)
    }

    /// `GET .../revisions/{rev}/submit_type`.
    pub fn submit_type(&self) -> Result<Payload> {
        self.get_endpoint("submit_type", &Query::new())
    }

    /// `GET .../revisions/{rev}/drafts`.
    pub fn drafts(&self) -> Result<Payload> {
        self.get_endpoint("drafts", &Query::new())
    }

    /// `GET .../revisions/{rev}/comments`.
    pub fn comments(&self) -> Result<Payload> {
        self.get_endpoint("comments", &Query::new())
    }

    /// `GET .../revisions/{rev}/files`: map of file path to `FileInfo`.
    pub fn files(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("files", query)
    }

    /// `POST .../revisions/{rev}/cherrypick`.
    pub fn cherrypick(&self, input: &CherryPickInput) -> Result<RawResponse> {
        self.post_endpoint("cherrypick", Some(input))
    }

    /// Resolves the changes owning the parents of this revision.
    ///
    /// The revision's own change is found by searching its commit. Each parent
    /// commit is searched the same way and classified:
    ///
    /// - a single parent is always `local`
    /// - of two parents, the one whose change targets the same branch as this
    ///   revision's change is `local`, the other `remote`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ParentResolution`] when a commit has no owning
    /// change, the commit has neither one nor two parents, or both parents
    /// fall on the same side.
    pub fn get_parent_info(&self) -> Result<ParentInfo> {
        let commit = self.commit_info()?;
        let sha = commit_sha(&commit)?;
        let changes = Changes::new(Arc::clone(&self.session));
        let current = owning_change(&changes, &sha)?;

        match commit.parents.as_slice() {
            [parent] => Ok(ParentInfo {
                local: Some(parent_link(&changes, parent)?),
                remote: None,
            }),
            [first, second] => {
                let mut info = ParentInfo::default();
                for parent in [first, second] {
                    let owner = owning_change(&changes, &parent.commit)?;
                    let slot = if owner.branch == current.branch {
                        &mut info.local
                    } else {
                        &mut info.remote
                    };
                    if slot.is_some() {
                        return Err(ApiError::ParentResolution(format!(
                            "both parents of {} resolve to the same side of {}",
                            sha, current.branch
                        )));
                    }
                    *slot = Some(ParentLink {
                        number: owner.number,
                        revision: parent.commit.clone(),
                    });
                }
                Ok(info)
            }
            parents => Err(ApiError::ParentResolution(format!(
                "commit {} has {} parents",
                sha,
                parents.len()
            ))),
        }
    }

    /// Binds a file path, producing the file resource.
    pub fn file(&self, file_id: impl Into<String>) -> RevisionFile {
        RevisionFile::new(self.clone(), file_id.into())
    }

    /// Binds an account, producing the revision reviewer resource.
    pub fn reviewer(&self, account_id: impl Into<String>) -> RevisionReviewer {
        RevisionReviewer {
            session: Arc::clone(&self.session),
            id: self.id.clone(),
            revision_id: self.revision_id.clone(),
            account_id: account_id.into(),
        }
    }
}

/// Returns the SHA of a fetched commit.
pub(crate) fn commit_sha(commit: &CommitInfo) -> Result<String> {
    commit
        .commit
        .clone()
        .ok_or_else(|| ApiError::Decode(serde_json::Error::missing_field("commit")))
}

fn owning_change(changes: &Changes, sha: &str) -> Result<ChangeInfo> {
    changes
        .search(&format!("commit:{}", sha))?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::ParentResolution(format!("no change owns commit {}", sha)))
}

fn parent_link(changes: &Changes, parent: &ParentCommit) -> Result<ParentLink> {
    let owner = owning_change(changes, &parent.commit)?;
    Ok(ParentLink {
        number: owner.number,
        revision: parent.commit.clone(),
    })
}

/// A reviewer's votes on one revision.
#[derive(Debug, Clone)]
pub struct RevisionReviewer {
    session: Arc<Session>,
    id: String,
    revision_id: String,
    account_id: String,
}

impl Resource for RevisionReviewer {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "RevisionReviewer",
        template: "a/changes/{}/revisions/{}/reviewers/{}",
        identity: &["id", "revision_id", "account_id"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(self.id.as_str()),
            "revision_id" => Some(self.revision_id.as_str()),
            "account_id" => Some(self.account_id.as_str()),
            _ => None,
        }
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl RevisionReviewer {
    /// `GET .../revisions/{rev}/reviewers/`: all reviewers of the revision.
    pub fn list(&self) -> Result<Payload> {
        let path = crate::api::url::format_template(
            Self::DESCRIPTOR.template,
            &[self.id.as_str(), self.revision_id.as_str(), ""],
        )?;
        self.session.get(&path, &Query::new())
    }

    /// `DELETE .../revisions/{rev}/reviewers/{account}/votes/{label}`.
    pub fn delete_vote(&self, label: &str) -> Result<RawResponse> {
        self.delete_endpoint(&format!("votes/{}", encode_segment(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;

    fn revision() -> Revision {
        let session = Session::new(ConnectionConfig::new("https://review.example.com")).unwrap();
        Revision::new(Arc::new(session), "12345".to_string(), "current".to_string())
    }

    #[test]
    fn test_revision_paths() {
        let revision = revision();
        assert_eq!(
            revision.endpoint("submit_type").unwrap(),
            "a/changes/12345/revisions/current/submit_type"
        );
        assert_eq!(
            revision.file("src/main.rs").endpoint("diff").unwrap(),
            "a/changes/12345/revisions/current/files/src%2Fmain.rs/diff"
        );
    }

    #[test]
    fn test_revision_reviewer_paths() {
        let reviewer = revision().reviewer("jdoe@example.com");
        assert_eq!(
            reviewer.endpoint("votes/Code-Review").unwrap(),
            "a/changes/12345/revisions/current/reviewers/jdoe%40example.com/votes/Code-Review"
        );
    }

    #[test]
    fn test_commit_sha_requires_commit() {
        let commit = CommitInfo {
            commit: None,
            parents: vec![],
            author: None,
            committer: None,
            subject: None,
            message: None,
        };
        assert!(matches!(commit_sha(&commit), Err(ApiError::Decode(_))));
    }
}

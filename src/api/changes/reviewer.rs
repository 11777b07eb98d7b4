//
//  gerrit-rest
//  api/changes/reviewer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Change-level reviewers.
//!
//! # Example
//!
//! ```rust,no_run
//! use gerrit_rest::api::GerritClient;
//! use gerrit_rest::api::common::Query;
//! use gerrit_rest::api::models::ReviewerInput;
//! use gerrit_rest::config::ConnectionConfig;
//!
//! let client = GerritClient::new(ConnectionConfig::new("https://review.example.com"))?;
//! let reviewers = client.changes().id("12345").reviewers();
//!
//! let suggested = reviewers.suggest(&Query::new().q("john").limit(5))?;
//! reviewers.add(&ReviewerInput::new("john@example.com"))?;
//! reviewers.account("john@example.com").delete_vote("Code-Review")?;
//! # Ok::<(), gerrit_rest::api::common::ApiError>(())
//! ```

use std::sync::Arc;

use super::Change;
use crate::api::common::{Query, Result};
use crate::api::models::ReviewerInput;
use crate::api::resource::{Descriptor, Resource};
use crate::api::response::{Payload, RawResponse};
use crate::api::session::Session;
use crate::api::url::encode_segment;

/// The reviewers of a change.
#[derive(Debug, Clone)]
pub struct ChangeReviewers {
    change: Change,
}

impl Resource for ChangeReviewers {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "ChangeReviewers",
        template: "a/changes/{}/reviewers/",
        identity: &["id"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        self.change.attribute(name)
    }

    fn session(&self) -> &Session {
        self.change.session()
    }
}

impl ChangeReviewers {
    pub(crate) fn new(change: Change) -> Self {
        Self { change }
    }

    /// `GET /changes/{id}/reviewers/`.
    pub fn list(&self) -> Result<Payload> {
        self.get_endpoint("", &Query::new())
    }

    /// `GET /changes/{id}/suggest_reviewers`.
    ///
    /// `query` carries the search text in `q` and an optional limit in `n`.
    pub fn suggest(&self, query: &Query) -> Result<Payload> {
        self.change.get_endpoint("suggest_reviewers", query)
    }

    /// `POST /changes/{id}/reviewers`.
    pub fn add(&self, input: &ReviewerInput) -> Result<RawResponse> {
        self.post_endpoint("", Some(input))
    }

    /// Binds an account id, email or username.
    pub fn account(&self, account_id: impl Into<String>) -> ChangeReviewer {
        ChangeReviewer {
            session: Arc::clone(&self.change.session),
            id: self.change.id.clone(),
            account_id: account_id.into(),
        }
    }
}

/// One reviewer of a change.
#[derive(Debug, Clone)]
pub struct ChangeReviewer {
    session: Arc<Session>,
    id: String,
    account_id: String,
}

impl Resource for ChangeReviewer {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "ChangeReviewer",
        template: "a/changes/{}/reviewers/{}",
        identity: &["id", "account_id"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(self.id.as_str()),
            "account_id" => Some(self.account_id.as_str()),
            _ => None,
        }
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl ChangeReviewer {
    /// `GET /changes/{id}/reviewers/{account}`.
    pub fn info(&self) -> Result<Payload> {
        self.get_endpoint("", &Query::new())
    }

    /// `GET /changes/{id}/reviewers/{account}/votes/`.
    pub fn votes(&self) -> Result<Payload> {
        self.get_endpoint("votes/", &Query::new())
    }

    /// `DELETE /changes/{id}/reviewers/{account}/votes/{label}`.
    pub fn delete_vote(&self, label: &str) -> Result<RawResponse> {
        self.delete_endpoint(&format!("votes/{}", encode_segment(label)))
    }

    /// `DELETE /changes/{id}/reviewers/{account}`: removes the reviewer.
    pub fn remove(&self) -> Result<RawResponse> {
        self.delete_endpoint("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;

    fn reviewers() -> ChangeReviewers {
        let session = Session::new(ConnectionConfig::new("https://review.example.com")).unwrap();
        ChangeReviewers::new(Change {
            session: Arc::new(session),
            id: "12345".to_string(),
        })
    }

    #[test]
    fn test_reviewer_paths() {
        let reviewer = reviewers().account("1000096");
        assert_eq!(reviewer.endpoint("").unwrap(), "a/changes/12345/reviewers/1000096");
        assert_eq!(
            reviewer.endpoint("votes/").unwrap(),
            "a/changes/12345/reviewers/1000096/votes/"
        );
    }

    #[test]
    fn test_suggest_is_change_level() {
        assert_eq!(
            reviewers().change.endpoint("suggest_reviewers").unwrap(),
            "a/changes/12345/suggest_reviewers"
        );
    }
}

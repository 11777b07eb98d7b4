//
//  gerrit-rest
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Projects API: `/projects/`.
//!
//! Project names nest with `/` (`platform/build`); each name is sent as one
//! percent-encoded path segment.
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
//! let all = client.projects().query(&Query::new().flag("d").param("p", "platform/"))?;
//! let branches = client.projects().name("platform/build").branches(&Query::new())?;
//! # Ok::<(), gerrit_rest::api::common::ApiError>(())
//! ```

use std::sync::Arc;

use super::common::{Query, Result};
use super::resource::{Descriptor, Resource};
use super::response::Payload;
use super::session::Session;

/// The `/projects/` collection.
#[derive(Debug, Clone)]
pub struct Projects {
    session: Arc<Session>,
}

impl Resource for Projects {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "Projects",
        template: "a/projects/",
        identity: &[],
    };

    fn attribute(&self, _name: &str) -> Option<&str> {
        None
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl Projects {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// `GET /projects/`: map of project name to `ProjectInfo`.
    ///
    /// Filters such as `p` (prefix), `r` (regex), `b` (branch) and the `d`
    /// (description) flag go through `query`.
    pub fn query(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("", query)
    }

    /// Binds a project name.
    pub fn name(&self, name: impl Into<String>) -> Project {
        Project {
            session: Arc::clone(&self.session),
            name: name.into(),
        }
    }
}

/// A single project.
#[derive(Debug, Clone)]
pub struct Project {
    session: Arc<Session>,
    name: String,
}

impl Resource for Project {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "Project",
        template: "a/projects/{}",
        identity: &["name"],
    };

    fn attribute(&self, name: &str) -> Option<&str> {
        (name == "name").then_some(self.name.as_str())
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl Project {
    /// The project name this resource was bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `GET /projects/{name}`.
    pub fn info(&self) -> Result<Payload> {
        self.get_endpoint("", &Query::new())
    }

    /// `GET /projects/{name}/description`.
    pub fn description(&self) -> Result<Payload> {
        self.get_endpoint("description", &Query::new())
    }

    /// `GET /projects/{name}/branches/`.
    pub fn branches(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("branches/", query)
    }

    /// `GET /projects/{name}/access`: the project's access rights.
    pub fn access(&self) -> Result<Payload> {
        self.get_endpoint("access", &Query::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;

    fn projects() -> Projects {
        let session = Session::new(ConnectionConfig::new("https://review.example.com")).unwrap();
        Projects::new(Arc::new(session))
    }

    #[test]
    fn test_project_paths() {
        assert_eq!(projects().endpoint("").unwrap(), "a/projects/");
        let project = projects().name("platform/build");
        assert_eq!(project.endpoint("access").unwrap(), "a/projects/platform%2Fbuild/access");
        assert_eq!(
            project.endpoint("branches/").unwrap(),
            "a/projects/platform%2Fbuild/branches/"
        );
    }
}

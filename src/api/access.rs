//
//  gerrit-rest
//  api/access.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Access rights API: `/access/`.

use std::sync::Arc;

use super::common::{Query, Result};
use super::resource::{Descriptor, Resource};
use super::response::Payload;
use super::session::Session;

/// The `/access/` collection.
///
/// # Example
///
/// ```rust,no_run
/// use gerrit_rest::api::GerritClient;
/// use gerrit_rest::api::common::Query;
/// use gerrit_rest::config::ConnectionConfig;
///
/// let client = GerritClient::new(ConnectionConfig::new("https://review.example.com"))?;
/// let rights = client.access().query(
///     &Query::new().param("project", "All-Projects").param("project", "platform/build"),
/// )?;
/// # Ok::<(), gerrit_rest::api::common::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Access {
    session: Arc<Session>,
}

impl Resource for Access {
    const DESCRIPTOR: Descriptor = Descriptor {
        resource: "Access",
        template: "a/access/",
        identity: &[],
    };

    fn attribute(&self, _name: &str) -> Option<&str> {
        None
    }

    fn session(&self) -> &Session {
        &self.session
    }
}

impl Access {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// `GET /access/`: access rights of the projects named by repeated
    /// `project` parameters, keyed by project name.
    pub fn query(&self, query: &Query) -> Result<Payload> {
        self.get_endpoint("", query)
    }
}

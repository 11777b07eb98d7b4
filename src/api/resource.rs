//
//  gerrit-rest
//  api/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Descriptor Resolver
//!
//! Every addressable object of the resource tree declares, once per type, an
//! endpoint template and the ordered list of attributes filling it. The
//! [`Resource`] trait turns that declaration plus an endpoint suffix into the
//! concrete request path, and offers one dispatch helper per verb so resource
//! methods stay one line long.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gerrit_rest::api::resource::{Descriptor, Resource};
//! use gerrit_rest::api::session::Session;
//!
//! struct Group {
//!     session: Arc<Session>,
//!     id: String,
//! }
//!
//! impl Resource for Group {
//!     const DESCRIPTOR: Descriptor = Descriptor {
//!         resource: "Group",
//!         template: "a/groups/{}",
//!         identity: &["id"],
//!     };
//!
//!     fn attribute(&self, name: &str) -> Option<&str> {
//!         (name == "id").then_some(self.id.as_str())
//!     }
//!
//!     fn session(&self) -> &Session {
//!         &self.session
//!     }
//! }
//! ```

use reqwest::header::HeaderMap;
use serde::Serialize;

use super::common::{ApiError, Query, Result};
use super::response::{Payload, RawResponse};
use super::session::Session;
use super::url::{format_template, join_segments};

/// Static routing declaration of a resource type.
///
/// # Fields
///
/// * `resource` - Type name used in error messages
/// * `template` - Path template with one `{}` per identity attribute
/// * `identity` - Attribute names filling the placeholders, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub resource: &'static str,
    pub template: &'static str,
    pub identity: &'static [&'static str],
}

/// An addressable node of the Gerrit resource tree.
///
/// Implementors supply the descriptor, attribute lookup and the shared
/// session; path resolution and verb dispatch are provided.
pub trait Resource {
    /// Routing declaration shared by all instances of the type.
    const DESCRIPTOR: Descriptor;

    /// Returns the value of a named identity attribute.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Returns the session requests are dispatched through.
    fn session(&self) -> &Session;

    /// Resolves the identity values in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingIdentityAttribute`] for the first declared
    /// attribute this instance cannot supply.
    fn identity_values(&self) -> Result<Vec<&str>> {
        let descriptor = Self::DESCRIPTOR;
        descriptor
            .identity
            .iter()
            .map(|&name| {
                self.attribute(name)
                    .ok_or(ApiError::MissingIdentityAttribute {
                        resource: descriptor.resource,
                        attribute: name,
                    })
            })
            .collect()
    }

    /// Builds the path of an endpoint of this resource.
    ///
    /// The identity values fill the template, then `suffix` is appended as
    /// the last path piece. An empty suffix addresses the resource itself and
    /// keeps the template's trailing `/`, if any.
    ///
    /// # Example
    ///
    /// For a revision with `id = "123"` and `revision_id = "current"`,
    /// `endpoint("commit")` yields `a/changes/123/revisions/current/commit`.
    fn endpoint(&self, suffix: &str) -> Result<String> {
        let base = format_template(Self::DESCRIPTOR.template, &self.identity_values()?)?;
        if suffix.is_empty() {
            Ok(base)
        } else {
            Ok(join_segments(&[base.as_str(), suffix]))
        }
    }

    /// GETs an endpoint and normalizes the JSON response.
    fn get_endpoint(&self, suffix: &str, query: &Query) -> Result<Payload> {
        self.session().get(&self.endpoint(suffix)?, query)
    }

    /// GETs an endpoint and returns the response unprocessed.
    fn get_raw_endpoint(&self, suffix: &str, query: &Query) -> Result<RawResponse> {
        self.session().get_raw(&self.endpoint(suffix)?, query)
    }

    /// PUTs a raw body to an endpoint.
    fn put_endpoint(&self, suffix: &str, body: Vec<u8>, headers: Option<HeaderMap>) -> Result<RawResponse> {
        self.session().put(&self.endpoint(suffix)?, body, headers)
    }

    /// PUTs a JSON payload to an endpoint.
    fn put_json_endpoint<P: Serialize + ?Sized>(&self, suffix: &str, payload: &P) -> Result<RawResponse> {
        self.session().put_json(&self.endpoint(suffix)?, payload)
    }

    /// POSTs an optional JSON payload to an endpoint.
    fn post_endpoint<P: Serialize + ?Sized>(&self, suffix: &str, payload: Option<&P>) -> Result<RawResponse> {
        self.session().post(&self.endpoint(suffix)?, payload)
    }

    /// DELETEs an endpoint.
    fn delete_endpoint(&self, suffix: &str) -> Result<RawResponse> {
        self.session().delete(&self.endpoint(suffix)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;

    struct FileNode {
        session: Session,
        id: String,
        revision_id: String,
        file_id: String,
    }

    impl Resource for FileNode {
        const DESCRIPTOR: Descriptor = Descriptor {
            resource: "FileNode",
            template: "a/changes/{}/revisions/{}/files/{}",
            identity: &["id", "revision_id", "file_id"],
        };

        fn attribute(&self, name: &str) -> Option<&str> {
            match name {
                "id" => Some(self.id.as_str()),
                "revision_id" => Some(self.revision_id.as_str()),
                "file_id" => Some(self.file_id.as_str()),
                _ => None,
            }
        }

        fn session(&self) -> &Session {
            &self.session
        }
    }

    /// Declares an identity attribute its instances never carry.
    struct Misdeclared {
        session: Session,
        id: String,
    }

    impl Resource for Misdeclared {
        const DESCRIPTOR: Descriptor = Descriptor {
            resource: "Misdeclared",
            template: "a/changes/{}/reviewers/{}",
            identity: &["id", "account_id"],
        };

        fn attribute(&self, name: &str) -> Option<&str> {
            (name == "id").then_some(self.id.as_str())
        }

        fn session(&self) -> &Session {
            &self.session
        }
    }

    fn session() -> Session {
        Session::new(ConnectionConfig::new("https://review.example.com")).unwrap()
    }

    fn file(file_id: &str) -> FileNode {
        FileNode {
            session: session(),
            id: "123".to_string(),
            revision_id: "current".to_string(),
            file_id: file_id.to_string(),
        }
    }

    #[test]
    fn test_endpoint_with_suffix() {
        assert_eq!(
            file("a/b.txt").endpoint("content").unwrap(),
            "a/changes/123/revisions/current/files/a%2Fb.txt/content"
        );
    }

    #[test]
    fn test_endpoint_root() {
        assert_eq!(
            file("README").endpoint("").unwrap(),
            "a/changes/123/revisions/current/files/README"
        );
    }

    #[test]
    fn test_missing_identity_attribute() {
        let node = Misdeclared {
            session: session(),
            id: "123".to_string(),
        };
        match node.endpoint("votes").unwrap_err() {
            ApiError::MissingIdentityAttribute { resource, attribute } => {
                assert_eq!(resource, "Misdeclared");
                assert_eq!(attribute, "account_id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

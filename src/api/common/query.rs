//
//  gerrit-rest
//  api/common/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query Parameters for Gerrit API Requests
//!
//! Gerrit endpoints take their options as URL query parameters. Some of them
//! repeat (`o=CURRENT_REVISION&o=CURRENT_COMMIT`) and some carry no value at all
//! (`no-limit`). [`Query`] keeps parameters as ordered pairs so both survive
//! untouched on their way to the server.
//!
//! # Example
//!
//! ```rust
//! use gerrit_rest::api::common::Query;
//!
//! let query = Query::new()
//!     .q("owner:self status:merged")
//!     .option("CURRENT_REVISION")
//!     .option("CURRENT_COMMIT")
//!     .flag("no-limit");
//!
//! assert_eq!(query.len(), 4);
//! assert_eq!(query.values("o").collect::<Vec<_>>(), vec!["CURRENT_REVISION", "CURRENT_COMMIT"]);
//! ```

/// Ordered list of query parameters forwarded verbatim to the server.
///
/// Keys may repeat. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arbitrary `key=value` parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Appends a search expression (`q=...`).
    ///
    /// Used by the list endpoints of changes, projects and reviewers.
    pub fn q(self, expression: impl Into<String>) -> Self {
        self.param("q", expression)
    }

    /// Appends an output option (`o=...`). Call repeatedly for several options.
    pub fn option(self, option: impl Into<String>) -> Self {
        self.param("o", option)
    }

    /// Appends a result limit (`n=...`).
    pub fn limit(self, limit: u32) -> Self {
        self.param("n", limit.to_string())
    }

    /// Appends a value-less flag such as `no-limit` or `skip-mergeable`.
    ///
    /// The flag is sent as `key=`, which Gerrit treats as present.
    pub fn flag(self, key: impl Into<String>) -> Self {
        self.param(key, "")
    }

    /// Returns the parameters as ordered pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns every value recorded for `key`, in insertion order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters, counting repeated keys individually.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Checks whether no parameter was added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_options_keep_order() {
        let query = Query::new()
            .option("ALL_COMMITS")
            .q("12345")
            .option("CURRENT_REVISION");

        assert_eq!(
            query.pairs(),
            &[
                ("o".to_string(), "ALL_COMMITS".to_string()),
                ("q".to_string(), "12345".to_string()),
                ("o".to_string(), "CURRENT_REVISION".to_string()),
            ]
        );
    }

    #[test]
    fn test_flag_has_empty_value() {
        let query = Query::new().flag("no-limit");
        assert_eq!(query.values("no-limit").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_from_iterator() {
        let query: Query = vec![("project", "All-Projects"), ("project", "tools")]
            .into_iter()
            .collect();
        assert_eq!(query.len(), 2);
        assert!(!query.is_empty());
        assert!(Query::new().is_empty());
    }
}

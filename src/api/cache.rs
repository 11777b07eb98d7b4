//
//  gerrit-rest
//  api/cache.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! In-memory response cache owned by a session.
//!
//! Entries are keyed by request signature (method, full URL including the
//! query string, and `Accept` header) and expire a fixed time after they were
//! stored. Expired entries are dropped when they are looked up and whenever a
//! new entry is stored, so the map never outgrows the requests made within one
//! expiry window.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use reqwest::blocking::Request;
use reqwest::header::ACCEPT;

use super::response::RawResponse;

/// Builds the cache key of a request.
pub fn request_signature(request: &Request) -> String {
    let accept = request
        .headers()
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    format!("{} {} [{}]", request.method(), request.url(), accept)
}

/// Time-bounded store of successful responses.
#[derive(Debug)]
pub struct ResponseCache {
    expire_after: Duration,
    entries: Mutex<HashMap<String, (Instant, RawResponse)>>,
}

impl ResponseCache {
    /// Creates an empty cache whose entries live for `expire_after`.
    pub fn new(expire_after: Duration) -> Self {
        Self {
            expire_after,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, (Instant, RawResponse)>> {
        // A panic while holding the lock cannot leave an entry half-written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the stored response for `key` if it has not expired.
    pub fn get(&self, key: &str) -> Option<RawResponse> {
        let mut entries = self.entries();
        match entries.get(key) {
            Some((stored_at, response)) if stored_at.elapsed() < self.expire_after => {
                Some(response.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores `response` under `key`, replacing any previous entry.
    ///
    /// Every expired entry is evicted first.
    pub fn insert(&self, key: String, response: RawResponse) {
        let mut entries = self.entries();
        entries.retain(|_, (stored_at, _)| stored_at.elapsed() < self.expire_after);
        entries.insert(key, (Instant::now(), response));
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.entries().clear();
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Checks whether the cache holds no entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

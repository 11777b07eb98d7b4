//
//  gerrit-rest
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use gerrit_rest::auth::Credential;
use gerrit_rest::config::{CachePolicy, ConnectionConfig, RetryPolicy};
use gerrit_rest::GerritClient;
use mockito::ServerGuard;
use tracing_subscriber::EnvFilter;

/// `Authorization` header sent for [`credential`].
pub const BASIC_AUTH: &str = "Basic amRvZTpzM2NyZXQ=";

/// Installs a test subscriber filtered by `GERRIT_DEBUG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("GERRIT_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn credential() -> Credential {
    Credential::basic("jdoe", "s3cret")
}

/// Connection to the mock server without retries or caching.
pub fn config(server: &ServerGuard) -> ConnectionConfig {
    ConnectionConfig::new(server.url())
        .with_retry(RetryPolicy::none())
        .with_cache(CachePolicy::disabled())
}

pub fn client(server: &ServerGuard) -> GerritClient {
    init_logging();
    GerritClient::new(config(server).with_auth(credential())).unwrap()
}

pub fn anonymous_client(server: &ServerGuard) -> GerritClient {
    init_logging();
    GerritClient::new(config(server)).unwrap()
}

/// Prefixes a JSON document the way Gerrit does.
pub fn gerrit_json(body: &str) -> String {
    format!(")]}}'\n{}", body)
}

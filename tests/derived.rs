//
//  gerrit-rest
//  tests/derived.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Operations that combine several requests: merge detection, parent
//! resolution, binary detection, file content and gitiles history.

mod common;

use common::{client, gerrit_json};
use gerrit_rest::api::models::ParentLink;
use gerrit_rest::{ApiError, Query};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

const HEAD: &str = "6d8f0c3b2a";
const LOCAL_PARENT: &str = "1f2e3d4c5b";
const REMOTE_PARENT: &str = "9a8b7c6d5e";

fn mock_commit(server: &mut ServerGuard, parents: &[&str]) -> Mock {
    let parents: Vec<_> = parents
        .iter()
        .map(|sha| json!({"commit": sha, "subject": "parent"}))
        .collect();
    let body = json!({"commit": HEAD, "parents": parents, "subject": "Merge branch 'stable'"});
    server
        .mock("GET", "/a/changes/12345/revisions/current/commit")
        .with_body(gerrit_json(&body.to_string()))
        .create()
}

fn mock_owner(server: &mut ServerGuard, sha: &str, number: u64, branch: &str) -> Mock {
    let body = json!([{"_number": number, "project": "demo", "branch": branch}]);
    server
        .mock("GET", "/a/changes/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), format!("commit:{}", sha)),
            Matcher::UrlEncoded("o".into(), "CURRENT_REVISION".into()),
        ]))
        .with_body(gerrit_json(&body.to_string()))
        .expect(1)
        .create()
}

#[test]
fn test_is_merge() {
    let mut server = mockito::Server::new();
    let _commit = mock_commit(&mut server, &[LOCAL_PARENT, REMOTE_PARENT]);
    assert!(client(&server).changes().id("12345").is_merge().unwrap());
}

#[test]
fn test_single_parent_is_not_merge() {
    let mut server = mockito::Server::new();
    let _commit = mock_commit(&mut server, &[LOCAL_PARENT]);
    assert!(!client(&server).changes().id("12345").is_merge().unwrap());
}

#[test]
fn test_parent_info_of_merge_commit() {
    let mut server = mockito::Server::new();
    let _commit = mock_commit(&mut server, &[LOCAL_PARENT, REMOTE_PARENT]);
    let current = mock_owner(&mut server, HEAD, 12345, "master");
    let local = mock_owner(&mut server, LOCAL_PARENT, 12001, "master");
    let remote = mock_owner(&mut server, REMOTE_PARENT, 11876, "stable-1.0");

    let info = client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .get_parent_info()
        .unwrap();

    current.assert();
    local.assert();
    remote.assert();
    assert_eq!(
        info.local,
        Some(ParentLink {
            number: 12001,
            revision: LOCAL_PARENT.to_string(),
        })
    );
    assert_eq!(
        info.remote,
        Some(ParentLink {
            number: 11876,
            revision: REMOTE_PARENT.to_string(),
        })
    );
}

#[test]
fn test_parent_info_of_single_parent() {
    let mut server = mockito::Server::new();
    let _commit = mock_commit(&mut server, &[LOCAL_PARENT]);
    let _current = mock_owner(&mut server, HEAD, 12345, "master");
    let _parent = mock_owner(&mut server, LOCAL_PARENT, 12001, "master");

    let info = client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .get_parent_info()
        .unwrap();

    assert_eq!(info.local.map(|link| link.number), Some(12001));
    assert!(info.remote.is_none());
}

#[test]
fn test_parent_info_rejects_parents_on_one_side() {
    let mut server = mockito::Server::new();
    let _commit = mock_commit(&mut server, &[LOCAL_PARENT, REMOTE_PARENT]);
    let _current = mock_owner(&mut server, HEAD, 12345, "master");
    let _local = mock_owner(&mut server, LOCAL_PARENT, 12001, "master");
    let _remote = mock_owner(&mut server, REMOTE_PARENT, 12002, "master");

    let err = client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .get_parent_info()
        .unwrap_err();

    assert!(matches!(err, ApiError::ParentResolution(_)));
}

#[test]
fn test_parent_info_without_owning_change() {
    let mut server = mockito::Server::new();
    let _commit = mock_commit(&mut server, &[LOCAL_PARENT]);
    let _current = mock_owner(&mut server, HEAD, 12345, "master");
    let _orphan = server
        .mock("GET", "/a/changes/")
        .match_query(Matcher::UrlEncoded("q".into(), format!("commit:{}", LOCAL_PARENT)))
        .with_body(gerrit_json("[]"))
        .create();

    let err = client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .get_parent_info()
        .unwrap_err();

    match err {
        ApiError::ParentResolution(message) => assert!(message.contains(LOCAL_PARENT)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_is_binary_reads_files_map() {
    let mut server = mockito::Server::new();
    let files = server
        .mock("GET", "/a/changes/12345/revisions/current/files")
        .with_body(gerrit_json(
            r#"{"/COMMIT_MSG":{"status":"A","lines_inserted":7,"size_delta":551,"size":551},"img/logo.png":{"binary":true,"status":"A","size_delta":2048,"size":2048},"README.md":{"lines_inserted":2,"lines_deleted":1,"size_delta":40,"size":1024}}"#,
        ))
        .expect(3)
        .create();

    let revision = client(&server).changes().id("12345").current_revision();

    assert!(revision.file("img/logo.png").is_binary().unwrap());
    assert!(!revision.file("README.md").is_binary().unwrap());
    assert!(!revision.file("missing.txt").is_binary().unwrap());
    files.assert();
}

#[test]
fn test_is_binary_rejects_malformed_files_map() {
    let mut server = mockito::Server::new();
    let _files = server
        .mock("GET", "/a/changes/12345/revisions/current/files")
        .with_body(gerrit_json(r#"{"img/logo.png":{"binary":"yes"}}"#))
        .create();

    let err = client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .file("img/logo.png")
        .is_binary()
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn test_content_is_decoded() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/a/changes/12345/revisions/current/files/docs%2Fnotes.txt/content")
        .with_header("content-type", "text/plain; charset=ISO-8859-1")
        .with_body("aGVsbG8gZ2Vycml0Cg==")
        .create();

    let content = client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .file("docs/notes.txt")
        .content()
        .unwrap();

    assert_eq!(content, b"hello gerrit\n");
}

#[test]
fn test_content_rejects_non_base64() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/a/changes/12345/revisions/current/files/README/content")
        .with_body("not base64!")
        .create();

    let err = client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .file("README")
        .content()
        .unwrap_err();

    assert!(matches!(err, ApiError::ContentDecode { .. }));
}

#[test]
fn test_history_log_defaults_to_revision_commit() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/a/changes/12345")
        .with_body(gerrit_json(r#"{"_number":12345,"project":"platform/demo","branch":"master"}"#))
        .create();
    let _commit = mock_commit(&mut server, &[LOCAL_PARENT]);
    let log = server
        .mock("GET", format!("/a/plugins/gitiles/platform/demo/+log/{}/src/lib.rs", HEAD).as_str())
        .match_query(Matcher::UrlEncoded("format".into(), "JSON".into()))
        .with_body(gerrit_json(r#"{"log":[{"commit":"6d8f0c3b2a"}]}"#))
        .expect(1)
        .create();

    let history = client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .file("src/lib.rs")
        .get_history_log(None, &Query::new())
        .unwrap();

    log.assert();
    assert_eq!(history.pointer("/log/0/commit"), Some(&json!(HEAD)));
}

#[test]
fn test_history_log_with_explicit_commit() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/a/changes/12345")
        .with_body(gerrit_json(r#"{"_number":12345,"project":"demo","branch":"master"}"#))
        .create();
    let log = server
        .mock("GET", "/a/plugins/gitiles/demo/+log/master/README")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("format".into(), "JSON".into()),
            Matcher::UrlEncoded("n".into(), "10".into()),
        ]))
        .with_body(gerrit_json(r#"{"log":[]}"#))
        .expect(1)
        .create();

    client(&server)
        .changes()
        .id("12345")
        .current_revision()
        .file("README")
        .get_history_log(Some("master"), &Query::new().limit(10))
        .unwrap();

    log.assert();
}

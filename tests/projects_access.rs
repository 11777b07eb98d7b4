//
//  gerrit-rest
//  tests/projects_access.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project and access endpoints against a mock Gerrit server.

mod common;

use common::{anonymous_client, client, gerrit_json};
use gerrit_rest::Query;
use mockito::Matcher;
use serde_json::json;

#[test]
fn test_project_list_with_filters() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/a/projects/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("p".into(), "platform/".into()),
            Matcher::UrlEncoded("d".into(), "".into()),
        ]))
        .with_body(gerrit_json(r#"{"platform/demo":{"id":"platform%2Fdemo","state":"ACTIVE"}}"#))
        .expect(1)
        .create();

    let projects = client(&server)
        .projects()
        .query(&Query::new().param("p", "platform/").flag("d"))
        .unwrap();

    mock.assert();
    assert_eq!(projects.pointer("/platform~1demo/state"), Some(&json!("ACTIVE")));
}

#[test]
fn test_nested_project_name_is_one_segment() {
    let mut server = mockito::Server::new();
    let info = server
        .mock("GET", "/a/projects/platform%2Fdemo")
        .with_body(gerrit_json(r#"{"id":"platform%2Fdemo","name":"platform/demo"}"#))
        .expect(1)
        .create();
    let description = server
        .mock("GET", "/a/projects/platform%2Fdemo/description")
        .with_body(gerrit_json(r#""Demo project""#))
        .expect(1)
        .create();

    let project = client(&server).projects().name("platform/demo");
    let record = project.info().unwrap();
    let text = project.description().unwrap();

    info.assert();
    description.assert();
    assert_eq!(record.get("name"), Some(&json!("platform/demo")));
    assert_eq!(text.into_value(), json!("Demo project"));
}

#[test]
fn test_project_branches_and_access() {
    let mut server = mockito::Server::new();
    let branches = server
        .mock("GET", "/a/projects/demo/branches/")
        .match_query(Matcher::UrlEncoded("n".into(), "2".into()))
        .with_body(gerrit_json(
            r#"[{"ref":"HEAD","revision":"master"},{"ref":"refs/heads/master","revision":"6d8f0c3b2a"}]"#,
        ))
        .expect(1)
        .create();
    let access = server
        .mock("GET", "/a/projects/demo/access")
        .with_body(gerrit_json(r#"{"inherits_from":{"id":"All-Projects"}}"#))
        .expect(1)
        .create();

    let project = client(&server).projects().name("demo");
    let listed = project.branches(&Query::new().limit(2)).unwrap();
    let rights = project.access().unwrap();

    branches.assert();
    access.assert();
    assert_eq!(listed.pointer("/1/ref"), Some(&json!("refs/heads/master")));
    assert_eq!(rights.pointer("/inherits_from/id"), Some(&json!("All-Projects")));
}

#[test]
fn test_access_query_repeats_project() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/access/")
        .match_header("authorization", Matcher::Missing)
        .match_query(Matcher::Exact("project=demo&project=All-Projects".into()))
        .with_body(gerrit_json(r#"{"demo":{"revision":"abc"},"All-Projects":{"revision":"def"}}"#))
        .expect(1)
        .create();

    let rights = anonymous_client(&server)
        .access()
        .query(&Query::new().param("project", "demo").param("project", "All-Projects"))
        .unwrap();

    mock.assert();
    assert_eq!(rights.pointer("/All-Projects/revision"), Some(&json!("def")));
}

//! Integration tests for the reqwest-based Drive client.
//!
//! These tests run against a local wiremock server and pin the request
//! shape (URL, query parameters, auth header) and the response mapping
//! (found, not-found, API fault) of [`RestDriveClient`].

use drivepath::adapters::RestDriveClient;
use drivepath::error::DriveError;
use drivepath::models::{FILE_FIELDS, FOLDER_MIME_TYPE};
use drivepath::query::Query;
use drivepath::resolver::{FolderResolver, ResolverOptions};
use drivepath::traits::DriveApi;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn folder_json(id: &str, name: &str, parent: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "mimeType": FOLDER_MIME_TYPE,
        "parents": [parent],
        "trashed": false
    })
}

/// get_file hits /drive/v3/files/{id} with shared-drive visibility and
/// returns the entry verbatim.
#[tokio::test]
async fn test_get_file_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files/F1"))
        .and(query_param("supportsAllDrives", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(folder_json("F1", "reports", "root")))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestDriveClient::with_base_url(server.uri());
    let file = client.get_file("F1").await.unwrap().expect("expected a file");
    assert_eq!(file.id, "F1");
    assert_eq!(file.name, "reports");
    assert!(file.is_folder());
}

/// A 404 on get maps to Ok(None), not an error.
#[tokio::test]
async fn test_get_file_not_found_maps_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = RestDriveClient::with_base_url(server.uri());
    assert!(client.get_file("unknown").await.unwrap().is_none());
}

/// Non-404 failures surface as DriveError::Api with status and body.
#[tokio::test]
async fn test_get_file_permission_fault() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files/F1"))
        .respond_with(ResponseTemplate::new(403).set_body_string("insufficient permissions"))
        .mount(&server)
        .await;

    let client = RestDriveClient::with_base_url(server.uri());
    let err = client.get_file("F1").await.unwrap_err();
    match err {
        DriveError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "insufficient permissions");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// The Bearer token is attached to requests when configured.
#[tokio::test]
async fn test_get_file_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files/F1"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(folder_json("F1", "reports", "root")))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestDriveClient::with_base_url(server.uri()).with_auth("test-token");
    assert!(client.get_file("F1").await.unwrap().is_some());
}

/// Listings carry the query, spaces, field projection, and both
/// shared-drive flags.
#[tokio::test]
async fn test_list_files_sends_full_parameter_set() {
    let query = Query::new().in_parent("root").folders_only().name_contains("rep");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", query.to_query_string()))
        .and(query_param("spaces", "drive"))
        .and(query_param("fields", FILE_FIELDS))
        .and(query_param("supportsAllDrives", "true"))
        .and(query_param("includeItemsFromAllDrives", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [folder_json("R1", "reports", "root")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestDriveClient::with_base_url(server.uri());
    let list = client.list_files(&query, None).await.unwrap();
    assert_eq!(list.files.len(), 1);
    assert_eq!(list.files[0].id, "R1");
    assert!(list.next_page_token.is_none());
}

/// A failing listing propagates the API fault untranslated.
#[tokio::test]
async fn test_list_files_server_fault() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend unavailable"))
        .mount(&server)
        .await;

    let client = RestDriveClient::with_base_url(server.uri());
    let err = client.list_files(&Query::new(), None).await.unwrap_err();
    assert!(matches!(err, DriveError::Api { status: 500, .. }));
}

/// End-to-end path resolution through the REST client.
#[tokio::test]
async fn test_path_resolution_over_rest() {
    let docs_query = "'root' in parents and mimeType = 'application/vnd.google-apps.folder' \
                      and name = 'docs' and trashed = false";
    let reports_query = "'D1' in parents and mimeType = 'application/vnd.google-apps.folder' \
                         and name = 'reports' and trashed = false";

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", docs_query))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [folder_json("D1", "docs", "root")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", reports_query))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [folder_json("R1", "reports", "D1")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = FolderResolver::new(RestDriveClient::with_base_url(server.uri()));
    let id = resolver.folder_id_by_path("/docs/reports/", "root").await.unwrap();
    assert_eq!(id.as_deref(), Some("R1"));
}

/// A segment lookup whose first page is empty but carries a continuation
/// token still resolves: the folder sits on the second page. With
/// single-page listings the same segment is reported missing.
#[tokio::test]
async fn test_path_walk_follows_page_tokens_over_rest() {
    let docs_query = "'root' in parents and mimeType = 'application/vnd.google-apps.folder' \
                      and name = 'docs' and trashed = false";

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", docs_query))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [],
            "nextPageToken": "p2"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", docs_query))
        .and(query_param("pageToken", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [folder_json("D1", "docs", "root")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = FolderResolver::new(RestDriveClient::with_base_url(server.uri()));
    let id = resolver.folder_id_by_path("docs", "root").await.unwrap();
    assert_eq!(id.as_deref(), Some("D1"));

    // First-page-only listings never see D1.
    let single_page = FolderResolver::with_options(
        RestDriveClient::with_base_url(server.uri()),
        ResolverOptions {
            follow_pages: false,
            ..ResolverOptions::default()
        },
    );
    let id = single_page.folder_id_by_path("docs", "root").await.unwrap();
    assert_eq!(id, None);
}

/// A listing split across two pages is fully consumed during the tree
/// search: the match sits under a folder only present on the second page.
#[tokio::test]
async fn test_search_follows_page_tokens_over_rest() {
    let contains_root = "'root' in parents and mimeType = 'application/vnd.google-apps.folder' \
                         and name contains 'needle'";
    let children_root =
        "'root' in parents and mimeType = 'application/vnd.google-apps.folder'";
    let contains_a = "'A' in parents and mimeType = 'application/vnd.google-apps.folder' \
                      and name contains 'needle'";
    let children_a = "'A' in parents and mimeType = 'application/vnd.google-apps.folder'";
    let contains_b = "'B' in parents and mimeType = 'application/vnd.google-apps.folder' \
                      and name contains 'needle'";

    let server = MockServer::start().await;
    let empty = ResponseTemplate::new(200).set_body_json(serde_json::json!({ "files": [] }));

    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", contains_root))
        .respond_with(empty.clone())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", children_root))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [folder_json("A", "alpha", "root")],
            "nextPageToken": "page-2"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", children_root))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [folder_json("B", "beta", "root")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", contains_a))
        .respond_with(empty.clone())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", children_a))
        .respond_with(empty.clone())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/drive/v3/files"))
        .and(query_param("q", contains_b))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [folder_json("B1", "needle-hit", "B")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = FolderResolver::new(RestDriveClient::with_base_url(server.uri()));
    let found = resolver
        .find_folder_containing("root", "needle")
        .await
        .unwrap();
    assert_eq!(found.expect("expected a match").id, "B1");
}

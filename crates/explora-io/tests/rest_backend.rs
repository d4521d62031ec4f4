use std::time::Duration;

use explora_core::ExplorationId;
use explora_io::{BackendError, PageBackend, RestBackend, RestBackendOptions};
use httpmock::MockServer;
use serde_json::json;

fn backend(server: &MockServer, key: Option<&str>) -> RestBackend {
    RestBackend::new(RestBackendOptions {
        url: server.base_url(),
        api_key: key.map(str::to_string),
        timeout: Duration::from_secs(5),
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn lists_pages_with_filters_and_key() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/rest/v1/exploration_pages")
            .query_param("exploration_id", "eq.E1")
            .query_param("order", "ordre.asc")
            .header("apikey", "anon-key")
            .header("Authorization", "Bearer anon-key");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                {
                    "id": "p1",
                    "exploration_id": "E1",
                    "type": "accueil",
                    "ordre": 1,
                    "nom": "Bienvenue",
                    "description": null,
                    "config": {},
                    "created_at": "2024-05-01T10:00:00+00:00",
                    "updated_at": "2024-05-01T10:00:00+00:00",
                    "illustration_url": "https://cdn.example.org/a.jpg"
                }
            ]));
    });

    let pages = backend(&server, Some("anon-key"))
        .list_pages(&ExplorationId::parse("E1").unwrap())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].page_type, "accueil");
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_maps_to_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1/exploration_pages");
        then.status(503);
    });

    let err = backend(&server, None)
        .list_pages(&ExplorationId::parse("E1").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Http { status: 503, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1/exploration_pages");
        then.status(200).body("{\"not\": \"a list\"}");
    });

    let err = backend(&server, None)
        .list_pages(&ExplorationId::parse("E1").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, BackendError::Decode(_)));
}

#[test]
fn resolves_slug() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET")
            .path("/rest/v1/explorations")
            .query_param("slug", "eq.balade-des-oiseaux");
        then.status(200).json_body(json!([{ "id": "E7", "slug": "balade-des-oiseaux" }]));
    });
    server.mock(|when, then| {
        when.method("GET")
            .path("/rest/v1/explorations")
            .query_param("slug", "eq.inconnue");
        then.status(200).json_body(json!([]));
    });

    let backend = backend(&server, None);
    assert_eq!(
        backend.resolve_slug_blocking("balade-des-oiseaux").unwrap(),
        ExplorationId::parse("E7")
    );
    assert_eq!(backend.resolve_slug_blocking("inconnue").unwrap(), None);
}

mod helpers;

use helpers::{domain_page, route_page, MockApiTransport};
use routefinder_application::services::PaginatedFetcher;
use routefinder_domain::{Domain, DomainError, Route};
use std::sync::Arc;

#[tokio::test]
async fn test_single_page_yields_its_resources() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response(
        "/v2/shared_domains",
        domain_page(None, &[("d-1", "example.com"), ("d-2", "example.org")]),
    );
    let fetcher = PaginatedFetcher::new(transport.clone());

    let domains: Vec<Domain> = fetcher.fetch_all("/v2/shared_domains").await.unwrap();

    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].name.as_ref(), "example.com");
    assert_eq!(domains[1].name.as_ref(), "example.org");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_follows_next_url_and_preserves_order() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response(
        "/v2/routes?results-per-page=2",
        route_page(
            Some("/v2/routes?page=2&results-per-page=2"),
            &[("r-1", Some("a"), "d-1"), ("r-2", Some("b"), "d-1")],
        ),
    );
    transport.set_response(
        "/v2/routes?page=2&results-per-page=2",
        route_page(
            Some("/v2/routes?page=3&results-per-page=2"),
            &[("r-3", Some("c"), "d-1"), ("r-4", None, "d-2")],
        ),
    );
    transport.set_response(
        "/v2/routes?page=3&results-per-page=2",
        route_page(None, &[("r-5", Some("e"), "d-1")]),
    );
    let fetcher = PaginatedFetcher::new(transport.clone());

    let routes: Vec<Route> = fetcher
        .fetch_all("/v2/routes?results-per-page=2")
        .await
        .unwrap();

    let guids: Vec<&str> = routes.iter().map(|r| r.guid.as_ref()).collect();
    assert_eq!(guids, vec!["r-1", "r-2", "r-3", "r-4", "r-5"]);
    assert_eq!(
        transport.requests(),
        vec![
            "/v2/routes?results-per-page=2",
            "/v2/routes?page=2&results-per-page=2",
            "/v2/routes?page=3&results-per-page=2",
        ]
    );
}

#[tokio::test]
async fn test_empty_next_url_string_terminates() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response(
        "/v2/routes",
        r#"{ "next_url": "", "resources": [ { "metadata": { "guid": "r-1" }, "entity": { "host": "foo" } } ] }"#,
    );
    let fetcher = PaginatedFetcher::new(transport.clone());

    let routes: Vec<Route> = fetcher.fetch_all("/v2/routes").await.unwrap();

    assert_eq!(routes.len(), 1);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_empty_page_yields_nothing() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response("/v2/private_domains", domain_page(None, &[]));
    let fetcher = PaginatedFetcher::new(transport);

    let domains: Vec<Domain> = fetcher.fetch_all("/v2/private_domains").await.unwrap();

    assert!(domains.is_empty());
}

#[tokio::test]
async fn test_transport_error_on_later_page_discards_results() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response(
        "/v2/routes",
        route_page(Some("/v2/routes?page=2"), &[("r-1", Some("a"), "d-1")]),
    );
    transport.set_failure(
        "/v2/routes?page=2",
        DomainError::Transport("connection reset".to_string()),
    );
    transport.set_response("/v2/routes?page=3", route_page(None, &[]));
    let fetcher = PaginatedFetcher::new(transport.clone());

    let result: Result<Vec<Route>, _> = fetcher.fetch_all("/v2/routes").await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::Transport("connection reset".to_string())
    );
    assert!(!transport.was_requested("/v2/routes?page=3"));
}

#[tokio::test]
async fn test_decode_error_is_fatal() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response("/v2/routes", "<html>502 Bad Gateway</html>");
    let fetcher = PaginatedFetcher::new(transport);

    let result: Result<Vec<Route>, _> = fetcher.fetch_all("/v2/routes").await;

    match result {
        Err(DomainError::Decode(message)) => assert!(message.starts_with("/v2/routes")),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resource_shape_mismatch_is_decode_error() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response(
        "/v2/shared_domains",
        r#"{ "next_url": null, "resources": [ { "metadata": { "guid": "d-1" }, "entity": {} } ] }"#,
    );
    let fetcher = PaginatedFetcher::new(transport);

    let result: Result<Vec<Domain>, _> = fetcher.fetch_all("/v2/shared_domains").await;

    assert!(matches!(result, Err(DomainError::Decode(_))));
}

#[tokio::test]
async fn test_malformed_route_is_decode_error() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response(
        "/v2/routes",
        r#"{ "next_url": null, "resources": [ { "metadata": { "guid": "r-1" }, "entity": { "host": 42, "domain_guid": "d-1" } } ] }"#,
    );
    let fetcher = PaginatedFetcher::new(transport);

    let result: Result<Vec<Route>, _> = fetcher.fetch_all("/v2/routes").await;

    assert!(matches!(result, Err(DomainError::Decode(_))));
}

#[tokio::test]
async fn test_route_without_guid_is_decode_error() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response(
        "/v2/routes",
        r#"{ "next_url": null, "resources": [ {}, { "entity": { "host": "foo" } } ] }"#,
    );
    let fetcher = PaginatedFetcher::new(transport);

    let result: Result<Vec<Route>, _> = fetcher.fetch_all("/v2/routes").await;

    assert!(matches!(result, Err(DomainError::Decode(_))));
}

#[tokio::test]
async fn test_null_resources_page_is_empty() {
    let transport = Arc::new(MockApiTransport::new());
    transport.set_response("/v2/routes", r#"{ "next_url": null, "resources": null }"#);
    let fetcher = PaginatedFetcher::new(transport);

    let routes: Vec<Route> = fetcher.fetch_all("/v2/routes").await.unwrap();

    assert!(routes.is_empty());
}

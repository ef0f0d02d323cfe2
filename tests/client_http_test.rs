use artic_client::{ArticClient, ArticError, ArtworkApi, ClientConfig};
use httpmock::prelude::*;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

fn client_for(server: &MockServer) -> ArticClient {
    let config = ClientConfig::default()
        .with_api_base_url(server.url("/api/v1"))
        .with_image_base_url(server.url("/iiif/2"));
    ArticClient::new(config).unwrap()
}

#[tokio::test]
async fn test_fetch_artworks_single_item() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/artworks")
                .query_param("limit", "1")
                .query_param("page", "1")
                .header("Accept", "application/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "pagination": {"total": 1, "limit": 1, "offset": 0, "total_pages": 1, "current_page": 1},
                    "data": [{"id": 1, "title": "Nighthawks", "image_id": "831a05de-d3f6-f4fa-a460-23008dd58dda"}]
                }));
        })
        .await;

    let client = client_for(&server);
    let envelope = assert_ok!(client.fetch_artworks(1, 1, None).await);

    api_mock.assert_async().await;
    assert_eq!(envelope.len(), 1);
    assert_eq!(envelope.artworks().unwrap()[0].id, 1);
    assert_eq!(envelope.pagination().unwrap().unwrap().current_page, Some(1));
}

#[tokio::test]
async fn test_fetch_artworks_passes_unusual_pagination_through() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/artworks");
            then.status(200).json_body(json!({
                "pagination": {"total": -1, "limit": 1.0, "offset": "0"},
                "data": [{"id": 27992, "title": "A Sunday on La Grande Jatte"}]
            }));
        })
        .await;

    let client = client_for(&server);
    let envelope = assert_ok!(client.fetch_artworks(1, 1, None).await);

    assert_eq!(envelope.artworks().unwrap()[0].id, 27992);
    assert_eq!(envelope.pagination.as_ref().unwrap()["limit"], json!(1.0));
    assert_err!(envelope.pagination());
}

#[tokio::test]
async fn test_fetch_artworks_forwards_fields() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/artworks")
                .query_param("limit", "20")
                .query_param("page", "2")
                .query_param("fields", "id,title,artist_display,image_id");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let client = client_for(&server);
    let envelope = client
        .fetch_artworks(20, 2, Some("id,title,artist_display,image_id"))
        .await
        .unwrap();

    api_mock.assert_async().await;
    assert!(envelope.is_empty());
}

#[tokio::test]
async fn test_fetch_artworks_server_error() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/artworks");
            then.status(500);
        })
        .await;

    let client = client_for(&server);
    let err = assert_err!(client.fetch_artworks(10, 1, None).await);

    api_mock.assert_async().await;
    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, ArticError::HttpError { status: 500, .. }));
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/artworks/42");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client.fetch_artwork_by_id(42).await.unwrap_err();
    assert!(matches!(err, ArticError::DecodeError(_)));
}

#[tokio::test]
async fn test_fetch_artwork_by_id() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/artworks/129884");
            then.status(200).json_body(json!({
                "data": {
                    "id": 129884,
                    "title": "Starry Night and the Astronauts",
                    "artist_display": "Alma Thomas\nAmerican, 1891-1978",
                    "date_display": "1972",
                    "image_id": "e966799b-97ee-1cc6-bd2f-a94b4b8bb8f9"
                }
            }));
        })
        .await;

    let client = client_for(&server);
    let artwork = client.fetch_artwork_by_id(129884).await.unwrap().artwork().unwrap();

    api_mock.assert_async().await;
    assert_eq!(artwork.title.as_deref(), Some("Starry Night and the Astronauts"));
    assert_eq!(
        client.image_url(artwork.image_id.as_deref(), "1686"),
        Some(server.url(
            "/iiif/2/e966799b-97ee-1cc6-bd2f-a94b4b8bb8f9/full/1686,/0/default.jpg"
        ))
    );
}

#[tokio::test]
async fn test_fetch_artwork_by_id_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/artworks/999999999");
            then.status(404)
                .json_body(json!({"status": 404, "error": "Not found", "detail": "The item you requested cannot be found."}));
        })
        .await;

    let client = client_for(&server);
    let err = client.fetch_artwork_by_id(999999999).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_search_artworks_returns_requested_count() {
    let server = MockServer::start_async().await;
    let hits: Vec<_> = (1..=5)
        .map(|i| json!({"_score": 100.0 - i as f64, "id": i, "title": format!("Water Lilies {}", i)}))
        .collect();
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/artworks/search")
                .query_param("q", "monet")
                .query_param("limit", "5");
            then.status(200).json_body(json!({
                "preference": null,
                "pagination": {"total": 5, "limit": 5, "offset": 0, "total_pages": 1, "current_page": 1},
                "data": hits
            }));
        })
        .await;

    let client = client_for(&server);
    let envelope = client.search_artworks("monet", 5).await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(envelope.len(), 5);
    assert!(envelope.extra.contains_key("preference"));
}

#[tokio::test]
async fn test_search_query_with_spaces_reaches_server_decoded() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/artworks/search")
                .query_param("q", "water lilies & bridges");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let client = client_for(&server);
    client
        .search_artworks("water lilies & bridges", 10)
        .await
        .unwrap();

    api_mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_probe() {
    let server = MockServer::start_async().await;
    let probe = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/artworks")
                .query_param("limit", "1");
            then.status(200).json_body(json!({"data": [{"id": 1}]}));
        })
        .await;

    let client = client_for(&server);
    assert!(client.test_connection().await);
    probe.assert_async().await;
}

#[tokio::test]
async fn test_connection_probe_reports_error_status_as_false() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/artworks");
            then.status(503);
        })
        .await;

    let client = client_for(&server);
    assert!(!client.test_connection().await);
}

#[tokio::test]
async fn test_unreachable_host() {
    let config = ClientConfig::default().with_api_base_url("http://127.0.0.1:1/api/v1");
    let client = ArticClient::new(config).unwrap();

    assert!(!client.test_connection().await);

    let err = client.fetch_artworks(10, 1, None).await.unwrap_err();
    assert!(matches!(err, ArticError::NetworkError { .. }));
}

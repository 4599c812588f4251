//! Tests for fetching media over HTTP

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::model::{Media, TYPE_VIDEO};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn media_page(code: &str, caption: &str) -> serde_json::Value {
    json!({
        "graphql": {
            "shortcode_media": {
                "id": "42",
                "shortcode": code,
                "display_url": "http://img/1.jpg",
                "video_url": "http://v/1.mp4",
                "is_video": true,
                "edge_media_to_caption": {"edges": [{"node": {"text": caption}}]},
                "edge_media_to_comment": {"count": 3},
                "taken_at_timestamp": 1_500_000_000,
                "edge_media_preview_like": {"count": 7},
                "owner": {"id": "9", "username": "u"},
                "is_ad": false
            }
        }
    })
}

fn client_for(server: &MockServer) -> InstagramClient {
    let config = ClientConfig {
        base_url: server.uri(),
        max_retries: 0,
        rate_limit: None,
        ..ClientConfig::default()
    };
    InstagramClient::from_config(&config).unwrap()
}

async fn mount_page(server: &MockServer, code: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/p/{code}/")))
        .and(query_param("__a", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_media_by_code() {
    let server = MockServer::start().await;
    mount_page(&server, "ABC", media_page("ABC", "hello")).await;

    let media = client_for(&server).fetch_media_by_code("ABC").await.unwrap();

    assert_eq!(media.code, "ABC");
    assert_eq!(media.media_type, TYPE_VIDEO);
    assert_eq!(media.media_url, "http://v/1.mp4");
    assert_eq!(media.caption, "hello");
    assert_eq!(media.owner.username, "u");
}

#[tokio::test]
async fn test_fetch_media_by_url() {
    let server = MockServer::start().await;
    mount_page(&server, "BaW0x1", media_page("BaW0x1", "from url")).await;

    let media = client_for(&server)
        .fetch_media_by_url("https://www.instagram.com/p/BaW0x1/?taken-by=u")
        .await
        .unwrap();

    assert_eq!(media.code, "BaW0x1");
}

#[tokio::test]
async fn test_fetch_missing_media() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/gone/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_media_by_code("gone")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MediaNotFound { ref code } if code == "gone"));
}

#[tokio::test]
async fn test_fetch_non_json_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/ABC/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_media_by_code("ABC")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_rejects_invalid_code_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for code in ["", "../etc", "a b"] {
        let err = client.fetch_media_by_code(code).await.unwrap_err();
        assert!(matches!(err, Error::InvalidShortcode { .. }), "{code:?}");
    }
}

#[tokio::test]
async fn test_update_refreshes_from_server() {
    let server = MockServer::start().await;
    mount_page(&server, "ABC", media_page("ABC", "fresh caption")).await;
    let client = client_for(&server);

    let mut media = Media {
        code: "ABC".to_string(),
        caption: "old caption".to_string(),
        ..Media::default()
    };
    media.update(&client).await;

    assert_eq!(media.caption, "fresh caption");
    assert_eq!(media.likes_count, 7);
}

#[tokio::test]
async fn test_update_keeps_record_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/p/ABC/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let original = Media {
        code: "ABC".to_string(),
        caption: "old caption".to_string(),
        ..Media::default()
    };
    let mut media = original.clone();
    media.update(&client).await;

    assert_eq!(media, original);
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let config = ClientConfig {
        timeout_seconds: 0,
        ..ClientConfig::default()
    };
    assert!(matches!(
        InstagramClient::from_config(&config),
        Err(Error::InvalidConfigValue { .. })
    ));
}

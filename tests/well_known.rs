// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use nostr_nip05_server::{
    api::router,
    config::{Config, ConfigError},
    error::StartupError,
    server,
    state::AppState,
};

const CONFIG: &str = r#"{
    "port": 8080,
    "names": {
        "alice": { "pubkey": "abc123", "relays": ["wss://r1", "wss://r2"] },
        "bob": { "pubkey": "def456" },
        "carol": { "pubkey": "0f0f", "relays": [] },
        "erin": { "pubkey": "e4e4", "relays": null }
    }
}"#;

fn app() -> Router {
    router(AppState::new(Config::from_json(CONFIG).unwrap()))
}

async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let request = Request::builder()
        .uri(uri)
        .header(header::ORIGIN, "https://client.example")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn resolves_name_with_relays() {
    let (status, headers, body) = get("/.well-known/nostr.json?name=alice").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        body,
        r#"{"names":{"alice":"abc123"},"relays":{"abc123":["wss://r1","wss://r2"]}}"#
    );
}

#[tokio::test]
async fn resolves_name_without_relays() {
    let (status, _, body) = get("/.well-known/nostr.json?name=bob").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["names"]["bob"], "def456");
    assert!(json.get("relays").is_none());
}

#[tokio::test]
async fn empty_relay_list_omits_relays_key() {
    let (status, _, body) = get("/.well-known/nostr.json?name=carol").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"names":{"carol":"0f0f"}}"#);
}

#[tokio::test]
async fn null_relay_list_omits_relays_key() {
    let (status, _, body) = get("/.well-known/nostr.json?name=erin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"names":{"erin":"e4e4"}}"#);
}

#[tokio::test]
async fn null_names_table_rejects_every_name() {
    let app = router(AppState::new(
        Config::from_json(r#"{"port":8080,"names":null}"#).unwrap(),
    ));
    let request = Request::builder()
        .uri("/.well-known/nostr.json?name=alice")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_name_is_bad_request() {
    let (status, _, body) = get("/.well-known/nostr.json?name=dave").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "invalid user");
}

#[tokio::test]
async fn missing_or_empty_name_is_bad_request() {
    for uri in [
        "/.well-known/nostr.json",
        "/.well-known/nostr.json?name=",
        "/.well-known/nostr.json?user=alice",
    ] {
        let (status, _, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, "invalid user", "{uri}");
    }
}

#[tokio::test]
async fn name_is_percent_decoded() {
    let (status, _, body) = get("/.well-known/nostr.json?name=al%69ce").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""alice":"abc123""#));
}

#[tokio::test]
async fn first_name_parameter_wins() {
    let (status, _, body) = get("/.well-known/nostr.json?name=bob&name=alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"names":{"bob":"def456"}}"#);
}

#[tokio::test]
async fn lookup_is_case_sensitive() {
    let (status, _, _) = get("/.well-known/nostr.json?name=Alice").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_queries_are_byte_identical() {
    let (_, _, first) = get("/.well-known/nostr.json?name=alice").await;
    let (_, _, second) = get("/.well-known/nostr.json?name=alice").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let (_, ok_headers, _) = get("/.well-known/nostr.json?name=alice").await;
    assert_eq!(ok_headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let (_, err_headers, _) = get("/.well-known/nostr.json?name=dave").await;
    assert_eq!(err_headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn other_paths_are_not_found() {
    let (status, _, _) = get("/nostr.json?name=alice").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_probes_respond() {
    let (status, _, body) = get("/health/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);

    let (status, _, body) = get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok","checks":{"service":"ok","names":4}}"#);
}

#[tokio::test]
async fn run_fails_on_unreadable_config() {
    let dir = tempfile::tempdir().unwrap();
    let err = server::run(&dir.path().join("missing.json"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StartupError::Config(ConfigError::Read { .. })
    ));
}

#[tokio::test]
async fn run_fails_on_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"port": "eighty"}"#).unwrap();

    let err = server::run(&path).await.unwrap_err();
    assert!(matches!(err, StartupError::Config(ConfigError::Parse(_))));
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the catalogue and monitoring endpoints

use std::net::SocketAddr;

use api::{Server, ServerConfig, ShutdownConfig};
use axum::http::StatusCode;
use serde_json::Value;

async fn start_server() -> SocketAddr {
    let config = ServerConfig::for_testing();
    let (addr, _) = Server::new(config, ShutdownConfig::default())
        .expect("Failed to create server")
        .run_for_testing()
        .await
        .expect("Failed to start test server");
    addr
}

async fn get_json(addr: SocketAddr, path: &str) -> (StatusCode, Value) {
    let response = reqwest::get(format!("http://{addr}{path}"))
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body: Value = response.json().await.expect("Failed to parse JSON body");
    (status, body)
}

#[tokio::test]
async fn root_returns_exact_banner() {
    let addr = start_server().await;

    let response = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, r#"{"message":"Neo Launcher Backend is running!"}"#);
}

#[tokio::test]
async fn hot_catalogue_defaults_to_twelve_from_one() {
    let addr = start_server().await;

    let (status, body) = get_json(addr, "/catalogue/hot").await;
    assert_eq!(status, StatusCode::OK);

    let games = body["games"].as_array().expect("games array");
    assert_eq!(games.len(), 12);
    assert_eq!(games[0]["id"], 1);
    assert_eq!(games[11]["id"], 12);
    assert_eq!(games[0]["rating"], 4.5);
    assert_eq!(games[0]["price"], 29.99);
    assert_eq!(games[0]["releaseDate"], "2024-01-01");
    assert_eq!(games[0]["genres"], serde_json::json!(["Action", "Adventure"]));
}

#[tokio::test]
async fn hot_catalogue_page_is_contiguous() {
    let addr = start_server().await;

    let (status, body) = get_json(addr, "/catalogue/hot?take=2&skip=3").await;
    assert_eq!(status, StatusCode::OK);

    let games = body["games"].as_array().expect("games array");
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["id"], 4);
    assert_eq!(games[0]["title"], "Game 4");
    assert_eq!(games[1]["id"], 5);
    assert_eq!(games[1]["title"], "Game 5");
}

#[tokio::test]
async fn hot_catalogue_developers_are_fixed() {
    let addr = start_server().await;

    for path in ["/catalogue/hot", "/catalogue/hot?take=0&skip=900"] {
        let (status, body) = get_json(addr, path).await;
        assert_eq!(status, StatusCode::OK);

        let developers = body["steamDevelopers"].as_array().expect("developer array");
        assert_eq!(developers.len(), 5);
        for (index, developer) in developers.iter().enumerate() {
            let id = index as u64 + 1;
            assert_eq!(developer["id"], id);
            assert_eq!(developer["name"], format!("Steam Developer {id}"));
            assert_eq!(
                developer["games"],
                serde_json::json!(["Game 1", "Game 2", "Game 3"])
            );
        }
    }
}

#[tokio::test]
async fn hot_catalogue_zero_take_yields_empty_page() {
    let addr = start_server().await;

    let (status, body) = get_json(addr, "/catalogue/hot?take=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["games"].as_array().expect("games array").len(), 0);
    assert_eq!(
        body["steamDevelopers"].as_array().expect("developer array").len(),
        5
    );
}

#[tokio::test]
async fn hot_catalogue_negative_parameters_clamp() {
    let addr = start_server().await;

    let (status, body) = get_json(addr, "/catalogue/hot?take=-5&skip=-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["games"].as_array().expect("games array").len(), 0);
}

#[tokio::test]
async fn hot_catalogue_oversized_take_is_capped() {
    let addr = start_server().await;

    let (status, body) = get_json(addr, "/catalogue/hot?take=100000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["games"].as_array().expect("games array").len(), 500);
}

#[tokio::test]
async fn hot_catalogue_non_numeric_take_is_rejected() {
    let addr = start_server().await;

    let response = reqwest::get(format!("http://{addr}/catalogue/hot?take=abc"))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("JSON error body");
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().expect("error message").contains("take"));
}

#[tokio::test]
async fn hot_catalogue_is_idempotent() {
    let addr = start_server().await;

    let first = reqwest::get(format!("http://{addr}/catalogue/hot?take=7&skip=42"))
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");
    let second = reqwest::get(format!("http://{addr}/catalogue/hot?take=7&skip=42"))
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");

    assert_eq!(first, second);
}

#[tokio::test]
async fn featured_games_are_fixed() {
    let addr = start_server().await;

    let (status, body) = get_json(addr, "/games/featured").await;
    assert_eq!(status, StatusCode::OK);

    let featured = body["featured"].as_array().expect("featured array");
    assert_eq!(featured.len(), 4);
    assert_eq!(featured[0]["id"], 1);
    assert_eq!(featured[0]["title"], "Featured Game 1");
    assert_eq!(featured[0]["price"], 39.99);
    for game in featured {
        assert_eq!(game["rating"], 4.8);
        assert_eq!(game["genres"], serde_json::json!(["RPG", "Strategy"]));
    }
}

#[tokio::test]
async fn health_reports_up() {
    let addr = start_server().await;

    let (status, body) = get_json(addr, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Up");
    assert_eq!(body["environment"], "testing");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn metrics_exposes_request_counter() {
    let addr = start_server().await;

    // Generate at least one counted request first
    let _ = get_json(addr, "/catalogue/hot").await;

    let response = reqwest::get(format!("http://{addr}/metrics"))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("launcher_api_requests_total"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let addr = start_server().await;

    let (status, body) = get_json(addr, "/api-doc/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/catalogue/hot"].is_object());
    assert!(body["paths"]["/games/featured"].is_object());
}

#[tokio::test]
async fn cors_is_wide_open() {
    let addr = start_server().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{addr}/catalogue/hot"))
        .header("Origin", "https://launcher.example")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("CORS header present");
    assert_eq!(allow_origin, "*");
}

//! End-to-end tests against a real server.
//!
//! Each test starts the server through the same code path as the binary,
//! bound to an ephemeral port on 127.0.0.1, and talks to it over TCP with
//! reqwest, the way a browser client would.
//!
//! Run with: cargo test --test api_tests

use std::net::SocketAddr;
use std::time::Duration;

use axum_server::Handle;
use binary_decoder::config::{AppConfig, HEALTH_STATUS};
use binary_decoder::create_router;
use binary_decoder::http::{serve_with_handle, ServerError};
use reqwest::{Client, Method, StatusCode};
use tokio::task::JoinHandle;

/// A running server and the handle that controls it.
struct TestServer {
    addr: SocketAddr,
    handle: Handle,
    task: JoinHandle<Result<(), ServerError>>,
}

/// Start the service on an ephemeral port.
async fn start() -> TestServer {
    let mut config = AppConfig::default();
    config.http.host = "127.0.0.1".to_string();
    config.http.port = 0;

    let handle = Handle::new();
    let server_handle = handle.clone();
    let task = tokio::spawn(async move {
        serve_with_handle(create_router(), &config, server_handle).await
    });

    let addr = handle
        .listening()
        .await
        .expect("Test server failed to bind");

    TestServer { addr, handle, task }
}

/// Start the service and return its address.
async fn spawn_server() -> SocketAddr {
    start().await.addr
}

fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}

fn allow_origin(response: &reqwest::Response) -> Option<&str> {
    response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn test_encode_then_decode_round_trip() {
    let addr = spawn_server().await;
    let client = Client::new();

    let text = "Hello, World! ~ 123";
    let response = client
        .post(url(addr, "/api/encode"))
        .header("Content-Type", "application/json")
        .body(format!(r#"{{"text":"{}"}}"#, text))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response), Some("*"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Codificado com sucesso");
    let binary = body["binary"].as_str().unwrap().to_string();
    assert_eq!(binary.split(' ').count(), text.len());

    let response = client
        .post(url(addr, "/api/decode"))
        .body(format!(r#"{{"binary":"{}"}}"#, binary))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["text"], text);
    assert_eq!(body["message"], "Decodificado com sucesso");
}

#[tokio::test]
async fn test_decode_plain_text_body() {
    let addr = spawn_server().await;

    let response = Client::new()
        .post(url(addr, "/api/decode"))
        .header("Content-Type", "text/plain")
        .body("00000000 01000001")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["text"], "A");
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_decode_invalid_format() {
    let addr = spawn_server().await;

    let response = Client::new()
        .post(url(addr, "/api/decode"))
        .body(r#"{"binary":"0000000X"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(allow_origin(&response), Some("*"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Erro ao processar: Entrada inválida - use apenas 0, 1 e espaços"
    );
}

#[tokio::test]
async fn test_encode_rejects_delete() {
    let addr = spawn_server().await;

    let response = Client::new()
        .delete(url(addr, "/api/encode"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(allow_origin(&response), Some("*"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Método não permitido");
}

#[tokio::test]
async fn test_preflight_on_every_route() {
    let addr = spawn_server().await;
    let client = Client::new();

    for path in ["/api/decode", "/api/encode", "/api/health"] {
        let response = client
            .request(Method::OPTIONS, url(addr, path))
            .header("Origin", "http://example.com")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{}", path);
        assert_eq!(allow_origin(&response), Some("*"), "{}", path);
        assert!(response.text().await.unwrap().is_empty(), "{}", path);
    }
}

#[tokio::test]
async fn test_health() {
    let addr = spawn_server().await;

    let response = Client::new()
        .get(url(addr, "/api/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response), Some("*"));
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/plain")
    );
    assert_eq!(response.text().await.unwrap(), HEALTH_STATUS);
}

#[tokio::test]
async fn test_graceful_shutdown_stops_server() {
    let server = start().await;
    assert_ne!(server.addr.port(), 0);

    let response = Client::new()
        .get(url(server.addr, "/api/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    server.handle.graceful_shutdown(Some(Duration::from_secs(1)));
    let result = tokio::time::timeout(Duration::from_secs(5), server.task)
        .await
        .expect("Server did not stop in time")
        .expect("Server task panicked");
    assert!(result.is_ok());
}

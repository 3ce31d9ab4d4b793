//! Integration tests for the HTTP backend.
//!
//! Each test binds a real listener on an ephemeral loopback port and talks to
//! it over HTTP. Run with: cargo test --test integration

use std::net::SocketAddr;

use hello_backend::api::{create_router, AppState};
use hello_backend::config::Config;
use hello_backend::metrics::HttpMetrics;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Start the service for `app_env` and return its base URL.
async fn spawn_server(app_env: &str) -> String {
    let config = Config::from_vars(vec![
        ("APP_ENV".to_string(), app_env.to_string()),
        ("PORT".to_string(), "0".to_string()),
    ])
    .expect("valid config");
    let metrics = HttpMetrics::new(&config.app_env).expect("metrics recorder");
    let router = create_router(AppState::new(config, metrics));

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    format!("http://{}", addr)
}

/// Value of the `http_requests_total` series for `path`.
fn request_count(rendered: &str, path: &str) -> Option<u64> {
    let path_label = format!("path=\"{path}\"");
    rendered
        .lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .find(|line| line.contains(&path_label))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
}

#[tokio::test]
async fn test_probes_over_http() {
    let base = spawn_server("development").await;
    let client = reqwest::Client::new();

    let health = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);
    assert_eq!(health.json::<Value>().await.unwrap(), json!({ "status": "healthy" }));

    let ready = client.get(format!("{base}/ready")).send().await.unwrap();
    assert_eq!(ready.status(), reqwest::StatusCode::OK);
    assert_eq!(ready.json::<Value>().await.unwrap(), json!({ "status": "ready" }));
}

#[tokio::test]
async fn test_api_reports_environment() {
    let base = spawn_server("production").await;

    let response = reqwest::get(format!("{base}/api")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "message": "Hello from Backend!", "environment": "production" })
    );
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let base = spawn_server("development").await;

    let response = reqwest::get(format!("{base}/nope")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_requests_are_counted_exactly() {
    const REQUESTS: u64 = 50;
    let base = spawn_server("staging").await;
    let client = reqwest::Client::new();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..REQUESTS {
        let client = client.clone();
        let url = format!("{base}/api");
        tasks.spawn(async move { client.get(url).send().await.unwrap().status() });
    }
    while let Some(status) = tasks.join_next().await {
        assert_eq!(status.unwrap(), reqwest::StatusCode::OK);
    }

    let metrics = client
        .get(format!("{base}/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(request_count(&metrics, "/api"), Some(REQUESTS));
    let info = metrics
        .lines()
        .find(|line| line.starts_with("app_info{"))
        .expect("app_info series");
    assert!(info.contains("version=\"1.0.0\""));
    assert!(info.contains("env=\"staging\""));
}

#[test]
fn test_non_numeric_port_fails_config_load() {
    let result = Config::from_vars(vec![("PORT".to_string(), "abc".to_string())]);
    assert!(result.is_err());
}

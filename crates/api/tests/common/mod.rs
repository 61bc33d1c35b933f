//! Shared helpers for HTTP-level integration tests.
//!
//! Tests exercise the same router and middleware stack production uses via
//! `build_app_router`, substituting a recording mock for the webhook
//! transport so no network traffic leaves the test.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use qadesk_api::auth::jwt::{generate_token, JwtConfig};
use qadesk_api::config::ServerConfig;
use qadesk_api::notify::NotificationSender;
use qadesk_api::router::build_app_router;
use qadesk_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        webhook_timeout_secs: 5,
        app_url: "http://localhost:5173".to_string(),
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_hours: 1,
        },
    }
}

/// A webhook transport that records every delivery instead of sending it.
///
/// `fail_urls` lists webhook URLs whose deliveries should report failure,
/// for exercising the all-or-nothing send-status rule.
#[derive(Default)]
pub struct MockSender {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_urls: Vec<String>,
}

impl MockSender {
    pub fn failing(urls: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    /// The (url, text) pairs delivered so far.
    pub fn deliveries(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockSender {
    async fn send(&self, webhook_url: &str, text: &str) -> Result<(), String> {
        self.sent
            .lock()
            .unwrap()
            .push((webhook_url.to_string(), text.to_string()));
        if self.fail_urls.iter().any(|u| u == webhook_url) {
            Err("Webhook delivery failed with status 500".to_string())
        } else {
            Ok(())
        }
    }
}

/// Build the full application router with the production middleware stack,
/// a recording mock transport, and the given database pool.
pub fn build_test_app(pool: PgPool, sender: Arc<MockSender>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        sender,
    };
    build_app_router(state, &config)
}

/// Shorthand for tests that never dispatch.
pub fn build_app(pool: PgPool) -> Router {
    build_test_app(pool, Arc::new(MockSender::default()))
}

/// Mint a bearer token accepted by the test app.
pub fn auth_token() -> String {
    let config = test_config();
    generate_token(&config.jwt, "test-user", "qa@example.com")
        .expect("failed to mint test token")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request failed")
}

fn authed(builder: axum::http::request::Builder) -> axum::http::request::Builder {
    builder.header("authorization", format!("Bearer {}", auth_token()))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = authed(Request::builder().method("GET").uri(uri))
        .body(Body::empty())
        .expect("failed to build request");
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = authed(Request::builder().method("POST").uri(uri))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = authed(Request::builder().method("PUT").uri(uri))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = authed(Request::builder().method("DELETE").uri(uri))
        .body(Body::empty())
        .expect("failed to build request");
    send(app, request).await
}

/// A GET without an Authorization header, for auth rejection tests.
pub async fn get_unauthed(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, request).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body was not valid JSON")
}

/// Assert status and return the `data` payload of the response envelope.
pub async fn expect_data(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    json.get("data").cloned().expect("missing data envelope")
}

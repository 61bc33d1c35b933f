//! Outbound webhook transport.
//!
//! Delivery is a single `POST { "text": ... }` to the configured URL;
//! success is solely a 2xx response. No retry, no backoff. The trait seam
//! exists so the dispatch engine can be exercised with a mock transport.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

/// Sends one notification text to one webhook URL.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver `text` to `webhook_url`. `Ok(())` on a 2xx response, `Err`
    /// with a human-readable reason otherwise.
    async fn send(&self, webhook_url: &str, text: &str) -> Result<(), String>;
}

/// Production transport: reqwest with a bounded per-request timeout, so a
/// hanging chat space cannot stall a dispatch indefinitely.
pub struct WebhookSender {
    client: reqwest::Client,
}

impl WebhookSender {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build webhook HTTP client");
        Self { client }
    }
}

#[async_trait]
impl NotificationSender for WebhookSender {
    async fn send(&self, webhook_url: &str, text: &str) -> Result<(), String> {
        let response = self
            .client
            .post(webhook_url)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| format!("Webhook request failed: {e}"))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(format!("Webhook delivery failed with status {status}"))
        }
    }
}

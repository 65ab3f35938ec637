//! Discord webhook delivery.

use anyhow::{bail, Context, Result};
use serde_json::json;

/// Display name the webhook posts under.
const BOT_USERNAME: &str = "AI Agents Stream Bot";

/// POST `content` to the webhook. Success is exactly an empty-body 204;
/// anything else is a delivery failure.
pub async fn send(webhook_url: &str, content: &str) -> Result<()> {
    let payload = json!({
        "content": content,
        "username": BOT_USERNAME,
    });

    let response = reqwest::Client::new()
        .post(webhook_url)
        .json(&payload)
        .send()
        .await
        .context("Webhook request failed")?;

    if response.status() == reqwest::StatusCode::NO_CONTENT {
        Ok(())
    } else {
        bail!("Webhook returned status {}", response.status());
    }
}

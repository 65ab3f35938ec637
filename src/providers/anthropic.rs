//! Anthropic messages backend (fallback provider).

use anyhow::{anyhow, Context, Result};
use serde_json::json;

use super::Generator;
use crate::config::Config;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 150;

pub struct Anthropic {
    api_key: Option<String>,
    model: String,
    client: reqwest::Client,
}

impl Anthropic {
    pub fn new(config: &Config) -> Self {
        Anthropic {
            api_key: config.anthropic_api_key.clone(),
            model: config.anthropic_model.clone(),
            client: reqwest::Client::new(),
        }
    }
}

impl Generator for Anthropic {
    fn label(&self) -> &'static str {
        "Anthropic"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("ANTHROPIC_API_KEY not set"))?;

        let body = json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("API returned an error status")?;

        let payload: serde_json::Value = response.json().await.context("invalid JSON response")?;
        payload["content"][0]["text"]
            .as_str()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| anyhow!("response has no completion text"))
    }
}

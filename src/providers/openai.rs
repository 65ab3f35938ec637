//! OpenAI chat-completions backend (primary provider).

use anyhow::{anyhow, Context, Result};
use serde_json::json;

use super::Generator;
use crate::config::Config;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const MAX_TOKENS: u32 = 150;
const TEMPERATURE: f64 = 0.7;

pub struct OpenAi {
    api_key: Option<String>,
    model: String,
    client: reqwest::Client,
}

impl OpenAi {
    pub fn new(config: &Config) -> Self {
        OpenAi {
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            client: reqwest::Client::new(),
        }
    }
}

impl Generator for OpenAi {
    fn label(&self) -> &'static str {
        "OpenAI"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("OPENAI_API_KEY not set"))?;

        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("API returned an error status")?;

        let payload: serde_json::Value = response.json().await.context("invalid JSON response")?;
        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| anyhow!("response has no completion text"))
    }
}

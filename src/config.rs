//! Runtime configuration, read once from the environment at startup and
//! passed down explicitly so components stay testable with fixed values.

/// Default public site URL, used when SITE_PUBLIC_URL is not set.
const DEFAULT_SITE_URL: &str = "https://real-ai-engineering.github.io/ai-agents-blog";

const OPENAI_MODEL: &str = "gpt-4o-mini";
const ANTHROPIC_MODEL: &str = "claude-3-haiku-20240307";

#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the primary text-generation provider, if configured.
    pub openai_api_key: Option<String>,
    /// Credential for the fallback text-generation provider, if configured.
    pub anthropic_api_key: Option<String>,
    /// Discord webhook URL for digest delivery, if configured.
    pub webhook_url: Option<String>,
    /// Public base URL of the site, for the digest footer link.
    pub site_url: String,

    pub openai_model: String,
    pub anthropic_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
            anthropic_api_key: non_empty_env("ANTHROPIC_API_KEY"),
            webhook_url: non_empty_env("DISCORD_WEBHOOK_URL"),
            site_url: non_empty_env("SITE_PUBLIC_URL")
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            openai_model: OPENAI_MODEL.to_string(),
            anthropic_model: ANTHROPIC_MODEL.to_string(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

//! Text-generation providers for description backfill.
//!
//! Providers form an ordered fallback chain: the primary is tried first and
//! any failure (missing credential, transport error, malformed response)
//! falls through to the next. The chain gives up only when every provider
//! has failed; the run itself never aborts because of a provider.

pub mod anthropic;
pub mod openai;

use anyhow::Result;

use crate::config::Config;

/// Target language for a generated description. The prompt text and the
/// language slot it fills vary together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }
}

/// Build the generation prompt for a stream title and its topic tags.
pub fn description_prompt(title: &str, tags: &[String], lang: Lang) -> String {
    let tags = tags.join(", ");
    match lang {
        Lang::Ru => format!(
            "Создай краткое описание для стрима '{}' с тегами [{}]. \
             2-3 предложения на русском языке. Без лишних слов, конкретно о том, \
             что будет в стриме.",
            title, tags
        ),
        Lang::En => format!(
            "Create a brief description for the stream '{}' with tags [{}]. \
             2-3 sentences in English. Be specific about what will be covered \
             in the stream.",
            title, tags
        ),
    }
}

/// A single text-generation backend: send a prompt, get text or fail.
#[allow(async_fn_in_trait)]
pub trait Generator {
    fn label(&self) -> &'static str;
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// The configured provider chain, in fallback order.
pub enum Provider {
    OpenAi(openai::OpenAi),
    Anthropic(anthropic::Anthropic),
}

impl Provider {
    /// Primary first, fallback second.
    pub fn chain(config: &Config) -> Vec<Provider> {
        vec![
            Provider::OpenAi(openai::OpenAi::new(config)),
            Provider::Anthropic(anthropic::Anthropic::new(config)),
        ]
    }
}

impl Generator for Provider {
    fn label(&self) -> &'static str {
        match self {
            Provider::OpenAi(p) => p.label(),
            Provider::Anthropic(p) => p.label(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        match self {
            Provider::OpenAi(p) => p.generate(prompt).await,
            Provider::Anthropic(p) => p.generate(prompt).await,
        }
    }
}

/// Try each provider in order; return the first success, or `None` when the
/// whole chain failed.
pub async fn generate_first<G: Generator>(providers: &[G], prompt: &str) -> Option<String> {
    for provider in providers {
        match provider.generate(prompt).await {
            Ok(text) => {
                println!("✓ Generated via {}", provider.label());
                return Some(text);
            }
            Err(err) => {
                println!("! {} error: {}", provider.label(), err);
            }
        }
    }
    None
}

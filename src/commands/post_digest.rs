//! `post-digest`: send the next week's schedule to the Discord webhook.

use std::path::Path;

use anyhow::{bail, Result};

use streamcal_core::digest::build_digest;
use streamcal_core::store;
use streamcal_core::window::now_in_reference_tz;

use crate::config::Config;
use crate::webhook;

pub async fn run(data: &Path, config: &Config) -> Result<()> {
    println!("Posting stream schedule to Discord...");

    let doc = match store::load(data) {
        Ok(doc) => doc,
        Err(err) => {
            println!("! Error loading {}: {}", data.display(), err);
            return Ok(());
        }
    };
    if doc.streams.is_empty() {
        println!("No streams found");
        return Ok(());
    }

    let (message, included) = build_digest(&doc.streams, now_in_reference_tz(), &config.site_url);
    println!("Found {} streams in next 7 days", included);
    println!("Message preview:\n{}...", truncate(&message, 200));

    // Building always completes; only delivery decides the exit code.
    let Some(webhook_url) = config.webhook_url.as_deref() else {
        println!("! DISCORD_WEBHOOK_URL not set");
        bail!("Failed to post to Discord");
    };

    match webhook::send(webhook_url, &message).await {
        Ok(()) => {
            println!("✓ Schedule posted to Discord");
            Ok(())
        }
        Err(err) => {
            println!("! {}", err);
            bail!("Failed to post to Discord");
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

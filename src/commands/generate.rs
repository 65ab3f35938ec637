//! `generate-descriptions`: fill in missing descriptions for streams
//! scheduled tomorrow, via the text-generation provider chain.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::DateTime;
use chrono_tz::Tz;

use streamcal_core::event::StreamEvent;
use streamcal_core::store;
use streamcal_core::window::{is_tomorrow, now_in_reference_tz};

use crate::config::Config;
use crate::providers::{description_prompt, generate_first, Generator, Lang, Provider};

/// Languages the schedule tracks descriptions in.
const TRACKED_LANGS: [Lang; 2] = [Lang::Ru, Lang::En];

pub async fn run(data: &Path, config: &Config) -> Result<()> {
    println!("Checking for streams needing AI descriptions...");

    let mut doc = match store::load(data) {
        Ok(doc) => doc,
        Err(err) => {
            println!("! Error loading {}: {}", data.display(), err);
            return Ok(());
        }
    };

    let providers = Provider::chain(config);
    let filled = backfill(&mut doc.streams, &providers, now_in_reference_tz()).await;

    if filled > 0 {
        store::save(data, &doc).with_context(|| format!("Failed to rewrite {}", data.display()))?;
        println!("✓ Updated {} ({} descriptions added)", data.display(), filled);
    } else {
        println!("• No descriptions needed");
    }
    Ok(())
}

/// Fill missing description slots for tomorrow's streams, in place.
/// Returns the number of slots filled. Provider failures are reported and
/// skipped; the pass always covers every event.
async fn backfill<G: Generator>(
    streams: &mut [StreamEvent],
    providers: &[G],
    now: DateTime<Tz>,
) -> usize {
    let mut filled = 0;

    for stream in streams.iter_mut() {
        if !is_tomorrow(&stream.start, now) {
            continue;
        }

        for lang in TRACKED_LANGS {
            if !stream.desc(lang.code()).trim().is_empty() {
                continue;
            }

            let title = stream.title(lang.code()).to_string();
            println!("Generating {} description for: {}", lang.code(), title);

            let prompt = description_prompt(&title, &stream.tags, lang);
            match generate_first(providers, &prompt).await {
                Some(text) => {
                    stream.set_desc(lang.code(), text);
                    filled += 1;
                }
                None => {
                    println!("! Could not generate {} description for: {}", lang.code(), title);
                }
            }
        }
    }

    filled
}

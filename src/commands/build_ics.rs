//! `build-ics`: render the calendar feed for all future streams.

use std::path::Path;

use anyhow::{Context, Result};

use streamcal_core::ics::build_calendar;
use streamcal_core::store::{self, ScheduleDoc};
use streamcal_core::window::now_in_reference_tz;

pub fn run(data: &Path, out: &Path) -> Result<()> {
    println!("Building ICS calendar...");

    // A missing or malformed schedule file still produces a valid (empty)
    // feed; only the output write can fail the run.
    let doc = match store::load(data) {
        Ok(doc) => doc,
        Err(err) => {
            println!("! Error loading {}: {}", data.display(), err);
            ScheduleDoc::default()
        }
    };

    if doc.streams.is_empty() {
        println!("No streams found, creating empty calendar");
    }

    let (feed, included) = build_calendar(&doc.streams, now_in_reference_tz());
    println!("Found {} future events", included);

    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    std::fs::write(out, feed).with_context(|| format!("Failed to write {}", out.display()))?;

    println!("✓ Created {}", out.display());
    Ok(())
}

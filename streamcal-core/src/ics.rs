//! ICS calendar feed rendering.
//!
//! The feed is a fixed minimal block layout consumed by calendar apps that
//! subscribe to the schedule URL: one VEVENT per future stream, timestamps
//! normalized to UTC. Values are substituted verbatim (no escaping or line
//! folding), matching what the site has always published.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::event::StreamEvent;
use crate::window::{is_future, parse_event_time};

/// Domain suffix appended to event ids to form globally unique UIDs.
const UID_DOMAIN: &str = "ai-agents-blog";

const CALENDAR_HEADER: [&str; 4] = [
    "BEGIN:VCALENDAR",
    "VERSION:2.0",
    "PRODID:-//AI Agents Blog//Stream Schedule//RU",
    "CALSCALE:GREGORIAN",
];

/// Render a raw schedule timestamp as an ICS UTC timestamp
/// (`YYYYMMDDTHHMMSSZ`). `None` if the timestamp does not parse.
pub fn format_ics_datetime(raw: &str) -> Option<String> {
    let dt = parse_event_time(raw)?;
    Some(dt.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ").to_string())
}

/// Build the calendar feed for all future events.
///
/// Returns the feed text and the number of events included. Events whose
/// start or end fails to render are dropped silently; an empty collection
/// still yields a well-formed empty calendar.
pub fn build_calendar(streams: &[StreamEvent], now: DateTime<Tz>) -> (String, usize) {
    let mut lines: Vec<String> = CALENDAR_HEADER.iter().map(|s| s.to_string()).collect();
    let mut included = 0;

    for stream in streams.iter().filter(|s| is_future(&s.start, now)) {
        let (Some(start), Some(end)) = (
            format_ics_datetime(&stream.start),
            format_ics_datetime(&stream.end),
        ) else {
            continue;
        };

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}@{}", stream.id, UID_DOMAIN));
        lines.push(format!("DTSTART:{}", start));
        lines.push(format!("DTEND:{}", end));
        lines.push(format!("SUMMARY:{}", stream.title("ru")));
        lines.push(format!("DESCRIPTION:{}", stream.desc("ru")));
        lines.push("END:VEVENT".to_string());
        included += 1;
    }

    lines.push("END:VCALENDAR".to_string());
    (lines.join("\n"), included)
}

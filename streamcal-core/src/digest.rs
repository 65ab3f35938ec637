//! Weekly digest rendering for the Discord webhook.
//!
//! The digest is Russian-language: day names, the МСК zone label and all
//! fixed copy match what subscribers see on the site.

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;

use crate::event::StreamEvent;
use crate::window::{is_within_next_days, parse_event_time};

/// How far ahead the digest looks, in days.
pub const DIGEST_WINDOW_DAYS: i64 = 7;

const HEADER: &str = "📅 **Расписание стримов на неделю**";
const NO_STREAMS: &str = "Стримов на ближайшую неделю не запланировано.";
const UNKNOWN_DATE: &str = "Дата неизвестна";

/// Monday-first short day names.
const WEEKDAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Platforms shown in the digest, in display order.
const PLATFORMS: [(&str, &str); 2] = [("twitch", "Twitch"), ("youtube", "YouTube")];

/// Render a stream start time as `dd.mm (Day) HH:MM МСК` in the reference
/// timezone. Unparseable input renders a fixed fallback label.
pub fn format_stream_time(raw: &str) -> String {
    match parse_event_time(raw) {
        Some(start) => {
            let day = WEEKDAYS[start.weekday().num_days_from_monday() as usize];
            format!(
                "{} ({}) {} МСК",
                start.format("%d.%m"),
                day,
                start.format("%H:%M")
            )
        }
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Build the digest message for all streams in the next
/// [`DIGEST_WINDOW_DAYS`] days.
///
/// Returns the message and the number of streams in the window. Streams are
/// sorted by their raw `start` strings; the timestamps in the schedule file
/// are uniformly formatted ISO-8601, so lexicographic order is chronological
/// order.
pub fn build_digest(streams: &[StreamEvent], now: DateTime<Tz>, site_url: &str) -> (String, usize) {
    let mut upcoming: Vec<&StreamEvent> = streams
        .iter()
        .filter(|s| is_within_next_days(&s.start, now, DIGEST_WINDOW_DAYS))
        .collect();

    if upcoming.is_empty() {
        return (format!("{}\n\n{}", HEADER, NO_STREAMS), 0);
    }

    upcoming.sort_by(|a, b| a.start.cmp(&b.start));
    let included = upcoming.len();

    let mut lines = vec![format!("{}\n", HEADER)];

    for stream in upcoming {
        let mut line = format!(
            "🔴 **{}** — {}",
            format_stream_time(&stream.start),
            stream.title("ru")
        );

        let platforms: Vec<String> = PLATFORMS
            .iter()
            .filter_map(|(key, label)| {
                stream
                    .links
                    .get(*key)
                    .filter(|url| !url.is_empty())
                    .map(|url| format!("[{}]({})", label, url))
            })
            .collect();
        if !platforms.is_empty() {
            line.push_str(&format!(" ({})", platforms.join(", ")));
        }

        lines.push(line);

        let desc = stream.desc("ru").trim();
        if !desc.is_empty() {
            lines.push(format!("   {}", desc));
        }

        lines.push(String::new());
    }

    lines.push(format!("Подробнее: {}/ru/schedule/", site_url));
    (lines.join("\n"), included)
}

//! Relative time-window predicates for schedule filtering.
//!
//! All "today / tomorrow / next week" reasoning happens in a single fixed
//! reference timezone. Each predicate takes `now` explicitly so callers can
//! inject a fixed instant in tests; production callers pass
//! [`now_in_reference_tz`].
//!
//! The three predicates deliberately differ: the calendar feed keeps only
//! strictly-future events, the description backfill wants calendar-date
//! equality with tomorrow (it runs once a day), and the weekly digest wants
//! a rolling continuous window anchored at the instant of the run.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The fixed timezone used for all calendar reasoning.
pub const REFERENCE_TZ: Tz = chrono_tz::Europe::Moscow;

/// The current instant in the reference timezone.
pub fn now_in_reference_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&REFERENCE_TZ)
}

/// Parse a raw schedule timestamp.
///
/// Accepts RFC 3339 (a literal `Z` suffix is UTC) and, failing that, naive
/// `YYYY-MM-DDTHH:MM[:SS]` values, which are read as reference-timezone
/// wall-clock time. Returns `None` on anything else.
pub fn parse_event_time(raw: &str) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&REFERENCE_TZ));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()?;
    REFERENCE_TZ.from_local_datetime(&naive).single()
}

fn parse_or_warn(raw: &str) -> Option<DateTime<Tz>> {
    let parsed = parse_event_time(raw);
    if parsed.is_none() {
        eprintln!("! Could not parse timestamp '{}', skipping event", raw);
    }
    parsed
}

/// Is the event strictly in the future?
///
/// Instant-based comparison, so an event that started one second ago is out
/// no matter what its wall-clock representation looks like.
pub fn is_future(start: &str, now: DateTime<Tz>) -> bool {
    match parse_or_warn(start) {
        Some(start) => start > now,
        None => false,
    }
}

/// Does the event fall on tomorrow's calendar date in the reference timezone?
///
/// Calendar-date equality, not a 24-hour window: 00:05 tomorrow qualifies,
/// 23:55 today does not, however close it is.
pub fn is_tomorrow(start: &str, now: DateTime<Tz>) -> bool {
    let Some(start) = parse_or_warn(start) else {
        return false;
    };
    match now.date_naive().succ_opt() {
        Some(tomorrow) => start.date_naive() == tomorrow,
        None => false,
    }
}

/// Does the event start within the next `days` days, inclusive on both ends?
///
/// Continuous-time window anchored at `now`, so a run at any time of day
/// captures the next full week rather than whole calendar days.
pub fn is_within_next_days(start: &str, now: DateTime<Tz>, days: i64) -> bool {
    let Some(start) = parse_or_warn(start) else {
        return false;
    };
    start >= now && start <= now + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Tz> {
        // Tuesday 2025-06-10, midday Moscow time.
        REFERENCE_TZ.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn future_is_strict() {
        let now = fixed_now();
        assert!(is_future("2025-06-10T12:00:01+03:00", now));
        assert!(!is_future("2025-06-10T12:00:00+03:00", now));
        assert!(!is_future("2025-06-10T11:59:59+03:00", now));
    }

    #[test]
    fn future_compares_instants_across_offsets() {
        let now = fixed_now();
        // 09:00:01 UTC is 12:00:01 Moscow.
        assert!(is_future("2025-06-10T09:00:01Z", now));
        assert!(!is_future("2025-06-10T09:00:00Z", now));
    }

    #[test]
    fn tomorrow_is_calendar_date_equality() {
        let now = fixed_now();
        assert!(is_tomorrow("2025-06-11T00:05:00+03:00", now));
        assert!(is_tomorrow("2025-06-11T23:55:00+03:00", now));
        // One minute away but still today.
        assert!(!is_tomorrow("2025-06-10T12:01:00+03:00", now));
        // 23 hours away but already the day after tomorrow.
        let late_now = REFERENCE_TZ.with_ymd_and_hms(2025, 6, 10, 23, 0, 0).unwrap();
        assert!(!is_tomorrow("2025-06-12T01:00:00+03:00", late_now));
    }

    #[test]
    fn tomorrow_converts_to_reference_timezone_first() {
        let now = fixed_now();
        // 22:30 UTC today is 01:30 Moscow tomorrow.
        assert!(is_tomorrow("2025-06-10T22:30:00Z", now));
    }

    #[test]
    fn within_next_days_is_inclusive_on_both_ends() {
        let now = fixed_now();
        assert!(is_within_next_days("2025-06-10T12:00:00+03:00", now, 7));
        assert!(is_within_next_days("2025-06-17T12:00:00+03:00", now, 7));
        assert!(!is_within_next_days("2025-06-17T12:00:01+03:00", now, 7));
        assert!(!is_within_next_days("2025-06-10T11:59:59+03:00", now, 7));
    }

    #[test]
    fn naive_timestamps_are_reference_wall_clock() {
        let now = fixed_now();
        assert!(is_future("2025-06-10T12:30:00", now));
        assert!(is_tomorrow("2025-06-11T10:00", now));
    }

    #[test]
    fn garbage_timestamps_match_nothing() {
        let now = fixed_now();
        assert!(!is_future("not a date", now));
        assert!(!is_tomorrow("", now));
        assert!(!is_within_next_days("2025-13-40T99:99:99Z", now, 7));
    }
}

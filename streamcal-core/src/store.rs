//! Wholesale YAML load/save of the schedule file.
//!
//! The file is read fresh at the start of every run and, when the backfill
//! changes anything, rewritten in one piece. There is no locking; concurrent
//! runs are serialized by the external scheduler.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleResult;
use crate::event::StreamEvent;

/// The schedule document: a `streams` collection plus whatever else the
/// site keeps in the same file (preserved on rewrite).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScheduleDoc {
    #[serde(default)]
    pub streams: Vec<StreamEvent>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Load the schedule document from `path`.
pub fn load(path: &Path) -> ScheduleResult<ScheduleDoc> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

/// Rewrite the schedule document at `path` in full.
pub fn save(path: &Path, doc: &ScheduleDoc) -> ScheduleResult<()> {
    let raw = serde_yaml::to_string(doc)?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_streams_and_defaults_missing_fields() {
        let doc: ScheduleDoc = serde_yaml::from_str(
            "streams:\n  - id: s1\n    start: 2025-06-01T10:00:00Z\n    end: 2025-06-01T11:00:00Z\n    title:\n      ru: Демо\n      en: Demo\n",
        )
        .unwrap();
        assert_eq!(doc.streams.len(), 1);
        let s = &doc.streams[0];
        assert_eq!(s.id, "s1");
        assert_eq!(s.title("en"), "Demo");
        assert!(s.tags.is_empty());
        assert!(s.links.is_empty());
    }

    #[test]
    fn round_trip_preserves_unknown_keys() {
        let input = "site_note: keep me\nstreams:\n  - id: s1\n    start: 2025-06-01T10:00:00Z\n    end: 2025-06-01T11:00:00Z\n    host: someone\n";
        let doc: ScheduleDoc = serde_yaml::from_str(input).unwrap();
        let out = serde_yaml::to_string(&doc).unwrap();
        assert!(out.contains("site_note: keep me"));
        assert!(out.contains("host: someone"));
    }

    #[test]
    fn missing_streams_key_is_empty_collection() {
        let doc: ScheduleDoc = serde_yaml::from_str("other: thing\n").unwrap();
        assert!(doc.streams.is_empty());
    }
}

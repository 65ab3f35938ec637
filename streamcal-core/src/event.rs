//! The stream schedule data model.
//!
//! Events are human-curated YAML entries. Fields are best-effort: anything
//! missing defaults to empty rather than failing the whole file, and unknown
//! keys survive a load/save round trip because the backfill command rewrites
//! the file wholesale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A field that is either a plain string or a map of language code to string.
///
/// The schedule file mixes both shapes freely, so resolution always goes
/// through [`Localized::resolve`] instead of inspecting the shape at call
/// sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Localized {
    Plain(String),
    PerLang(BTreeMap<String, String>),
}

impl Localized {
    /// Resolve to a concrete string for the requested language.
    ///
    /// Lookup order is fixed: requested key → `"ru"` → `"en"` → `""`.
    /// A plain value is returned verbatim for any requested language.
    /// Never fails; absence degrades to the empty string.
    pub fn resolve(&self, lang: &str) -> &str {
        match self {
            Localized::Plain(s) => s,
            Localized::PerLang(map) => map
                .get(lang)
                .or_else(|| map.get("ru"))
                .or_else(|| map.get("en"))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }
}

/// Resolve an optional localized field, treating absence as empty.
pub fn resolve<'a>(field: Option<&'a Localized>, lang: &str) -> &'a str {
    field.map(|f| f.resolve(lang)).unwrap_or("")
}

/// One scheduled broadcast entry in the schedule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamEvent {
    /// Stable opaque identifier, used as the calendar UID base.
    #[serde(default)]
    pub id: String,

    /// ISO-8601 start/end timestamps, kept as raw text and parsed per use.
    /// May be `Z`-suffixed or lack an offset entirely.
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Localized>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<Localized>,

    /// Short topic tags, used only as generation-prompt context.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Platform name → URL. A non-empty value means "show this platform".
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<String, String>,

    /// Any other keys present in the source file, preserved on rewrite.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl StreamEvent {
    /// Resolved title for the given language (empty string if absent).
    pub fn title(&self, lang: &str) -> &str {
        resolve(self.title.as_ref(), lang)
    }

    /// Resolved description for the given language (empty string if absent).
    pub fn desc(&self, lang: &str) -> &str {
        resolve(self.desc.as_ref(), lang)
    }

    /// Write a generated description into one language slot.
    ///
    /// A plain `desc` value is upgraded to a language map. The plain value
    /// is kept as the `ru` slot unless `ru` is the slot being written; the
    /// untouched slot defaults to empty.
    pub fn set_desc(&mut self, lang: &str, text: String) {
        match &mut self.desc {
            Some(Localized::PerLang(map)) => {
                map.insert(lang.to_string(), text);
            }
            other => {
                let previous = match other {
                    Some(Localized::Plain(s)) => std::mem::take(s),
                    _ => String::new(),
                };
                let mut map = BTreeMap::new();
                if lang != "ru" {
                    map.insert("ru".to_string(), previous);
                }
                if lang != "en" {
                    map.entry("en".to_string()).or_insert_with(String::new);
                }
                map.insert(lang.to_string(), text);
                *other = Some(Localized::PerLang(map));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_lang(pairs: &[(&str, &str)]) -> Localized {
        Localized::PerLang(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn resolve_prefers_requested_language() {
        let field = per_lang(&[("ru", "А"), ("en", "B")]);
        assert_eq!(field.resolve("en"), "B");
        assert_eq!(field.resolve("ru"), "А");
    }

    #[test]
    fn resolve_falls_back_ru_then_en() {
        let field = per_lang(&[("ru", "А"), ("en", "B")]);
        assert_eq!(field.resolve("fr"), "А");

        let en_only = per_lang(&[("en", "B")]);
        assert_eq!(en_only.resolve("ru"), "B");

        let empty = per_lang(&[]);
        assert_eq!(empty.resolve("ru"), "");
    }

    #[test]
    fn resolve_plain_is_verbatim() {
        let field = Localized::Plain("X".to_string());
        assert_eq!(field.resolve("ru"), "X");
        assert_eq!(field.resolve("de"), "X");
    }

    #[test]
    fn resolve_absent_is_empty() {
        assert_eq!(resolve(None, "ru"), "");
    }

    #[test]
    fn localized_deserializes_both_shapes() {
        let plain: Localized = serde_yaml::from_str("\"Стрим\"").unwrap();
        assert_eq!(plain, Localized::Plain("Стрим".to_string()));

        let map: Localized = serde_yaml::from_str("ru: Стрим\nen: Stream\n").unwrap();
        assert_eq!(map.resolve("en"), "Stream");
    }

    #[test]
    fn set_desc_inserts_into_existing_map() {
        let mut event = StreamEvent {
            desc: Some(per_lang(&[("ru", "уже есть")])),
            ..empty_event()
        };
        event.set_desc("en", "generated".to_string());
        assert_eq!(event.desc("en"), "generated");
        assert_eq!(event.desc("ru"), "уже есть");
    }

    #[test]
    fn set_desc_upgrades_plain_value() {
        let mut event = StreamEvent {
            desc: Some(Localized::Plain("старое описание".to_string())),
            ..empty_event()
        };
        event.set_desc("en", "generated".to_string());
        // The plain value survives as the ru slot.
        assert_eq!(event.desc("ru"), "старое описание");
        assert_eq!(event.desc("en"), "generated");
    }

    #[test]
    fn set_desc_from_absent_fills_other_slot_empty() {
        let mut event = empty_event();
        event.set_desc("ru", "сгенерировано".to_string());
        assert_eq!(event.desc("ru"), "сгенерировано");
        match &event.desc {
            Some(Localized::PerLang(map)) => assert_eq!(map.get("en").map(String::as_str), Some("")),
            other => panic!("expected language map, got {:?}", other),
        }
    }

    fn empty_event() -> StreamEvent {
        StreamEvent {
            id: String::new(),
            start: String::new(),
            end: String::new(),
            title: None,
            desc: None,
            tags: vec![],
            links: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }
}

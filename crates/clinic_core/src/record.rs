/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Flat records as delivered by the content API.
//!
//! The API is permissive: attributes may be missing, `null`, numbers where
//! strings are expected, or empty. Reading through [`RawRecord`] never fails;
//! anything unusable is treated as absent.

use crate::lang::ApiSuffix;
use crate::localized::Localized;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A record identifier: the API uses integers, fixtures sometimes use strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Str(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(i) => write!(f, "{}", i),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An API record as an ordered attribute map.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RawRecord(pub IndexMap<String, Value>);

impl RawRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The record id, when it is an integer or a string.
    pub fn id(&self) -> Option<RecordId> {
        match self.get("id")? {
            Value::Number(n) => n.as_i64().map(RecordId::Number),
            Value::String(s) => Some(RecordId::Str(s.clone())),
            _ => None,
        }
    }

    /// A single-language attribute. Numbers keep their decimal text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Collect `<field>_<suffix>` attributes into a [`Localized`].
    ///
    /// Only JSON strings count; `null` and other value types are absent.
    pub fn localized(&self, field: &str) -> Localized {
        let mut localized = Localized::default();
        for suffix in ApiSuffix::ALL {
            if let Some(Value::String(s)) = self.get(&suffixed_key(field, *suffix)) {
                localized.set(*suffix, s.as_str());
            }
        }
        localized
    }

    pub fn put_id(&mut self, id: Option<&RecordId>) {
        let value = match id {
            Some(RecordId::Number(n)) => Value::from(*n),
            Some(RecordId::Str(s)) => Value::from(s.as_str()),
            None => return,
        };
        self.0.insert("id".to_string(), value);
    }

    pub fn put_text(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.0.insert(key.to_string(), Value::from(v));
        }
    }

    pub fn put_localized(&mut self, field: &str, value: &Localized) {
        for (suffix, text) in value.iter() {
            self.0.insert(suffixed_key(field, suffix), Value::from(text));
        }
    }
}

/// The API attribute name for one language of a field, e.g. `title_kr`.
pub fn suffixed_key(field: &str, suffix: ApiSuffix) -> String {
    format!("{}_{}", field, suffix.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> RawRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_localized_reads_suffixed_strings_only() {
        let raw = record(
            r#"{"title_uz": "Asosiy", "title_ru": null, "title_en": 5, "title_kr": ""}"#,
        );
        let title = raw.localized("title");
        assert_eq!(title.uz.as_deref(), Some("Asosiy"));
        assert_eq!(title.kr.as_deref(), Some(""));
        assert!(title.ru.is_none());
        assert!(title.en.is_none());
    }

    #[test]
    fn test_id_and_text_accept_numbers() {
        let raw = record(r#"{"id": 12, "count": 7000, "image": "/a.png", "link": null}"#);
        assert_eq!(raw.id(), Some(RecordId::Number(12)));
        assert_eq!(raw.text("count").as_deref(), Some("7000"));
        assert_eq!(raw.text("image").as_deref(), Some("/a.png"));
        assert_eq!(raw.text("link"), None);
        assert_eq!(raw.text("missing"), None);
    }

    #[test]
    fn test_put_localized_uses_api_keys() {
        let mut raw = RawRecord::default();
        raw.put_localized("question", &crate::localized!(kg = "Эмне?"));
        assert_eq!(raw.get("question_kg"), Some(&Value::from("Эмне?")));
        assert_eq!(raw.0.len(), 1);
    }
}

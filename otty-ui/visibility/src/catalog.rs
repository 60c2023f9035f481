use std::collections::HashMap;

use serde_json::Value;

use crate::errors::CatalogError;
use crate::model::Translator;

const ENGLISH: [(&str, &str); 3] = [
    ("memo.visibility.private", "Private"),
    ("memo.visibility.protected", "Protected"),
    ("memo.visibility.public", "Public"),
];

/// Flat key/label dictionary used as a [`Translator`].
///
/// Locale documents are nested JSON objects; nested keys are joined with
/// dots, so `{"memo": {"visibility": {"public": "Public"}}}` resolves
/// `memo.visibility.public`. Lookups of unknown keys return the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: ENGLISH
                .iter()
                .map(|(key, label)| ((*key).to_owned(), (*label).to_owned()))
                .collect(),
        }
    }
}

impl Catalog {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parse a locale document.
    ///
    /// Leaves that are not strings are skipped with a warning.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(source)?;
        let map = match root {
            Value::Object(map) => map,
            other => return Err(CatalogError::InvalidShape(json_kind(&other))),
        };

        let mut entries = HashMap::new();
        let mut prefix = String::new();
        flatten_into(&map, &mut prefix, &mut entries);
        Ok(Self { entries })
    }

    /// Fill keys missing from this catalog with labels from `fallback`.
    pub fn with_fallback(mut self, fallback: Catalog) -> Self {
        for (key, label) in fallback.entries {
            self.entries.entry(key).or_insert(label);
        }
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(key.into(), label.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_owned()
    }
}

fn flatten_into(
    map: &serde_json::Map<String, Value>,
    prefix: &mut String,
    entries: &mut HashMap<String, String>,
) {
    for (name, value) in map {
        let restore = prefix.len();
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(name);

        match value {
            Value::String(label) => {
                entries.insert(prefix.clone(), label.clone());
            },
            Value::Object(children) => flatten_into(children, prefix, entries),
            other => {
                log::warn!(
                    "catalog skipped {prefix}: expected string, found {}",
                    json_kind(other)
                );
            },
        }

        prefix.truncate(restore);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

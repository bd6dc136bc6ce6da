//! Localization of label keys.
//!
//! Translation files use the nested JSON layout common to VTT language
//! packs (`{"GRIMWILD": {"Stat": {"bra": {"long": "Brawn"}}}}`). They are
//! flattened into dotted keys on load.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::CoreResult;

/// Resolves a localization key to display text.
///
/// Implementations return `None` for unknown keys; callers fall back to
/// the raw key.
pub trait Localizer: Send + Sync {
    /// Look up the display string for `key`.
    fn localize(&self, key: &str) -> Option<String>;

    /// Look up `key`, falling back to `fallback` when unresolved.
    fn localize_or(&self, key: &str, fallback: &str) -> String {
        self.localize(key).unwrap_or_else(|| fallback.to_string())
    }
}

/// A localizer that never resolves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalizer;

impl Localizer for NoLocalizer {
    fn localize(&self, _key: &str) -> Option<String> {
        None
    }
}

/// A localizer backed by a flattened JSON translation table.
#[derive(Debug, Clone, Default)]
pub struct JsonLocalizer {
    strings: HashMap<String, String>,
}

impl JsonLocalizer {
    /// Parse a (possibly nested) JSON translation document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let mut strings = HashMap::new();
        flatten("", &value, &mut strings);
        Ok(Self { strings })
    }

    /// Load a translation file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Number of translated keys.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if no keys were loaded.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Localizer for JsonLocalizer {
    fn localize(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        // Numbers, arrays and nulls are not display strings.
        _ => {}
    }
}

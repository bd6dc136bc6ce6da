//! The stat catalog: which stats exist, in what order, and how they are
//! labeled and classified.
//!
//! The catalog is configuration, not character state. It can be loaded
//! from JSON or taken from the built-in [`StatCatalog::grimwild`] preset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// Whether a stat governs bodily or mental action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatDomain {
    /// Bodily action; penalized while bloodied.
    Physical,
    /// Mental or social action; penalized while rattled.
    Mental,
}

impl std::fmt::Display for StatDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Physical => write!(f, "physical"),
            Self::Mental => write!(f, "mental"),
        }
    }
}

/// Catalog entry for one stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDescriptor {
    /// Canonical stat key (e.g. "bra").
    pub key: String,
    /// Localization key for the full label.
    pub label: String,
    /// Localization key for the abbreviation.
    pub abbr: String,
    /// Physical or mental classification.
    pub domain: StatDomain,
}

impl StatDescriptor {
    /// Create a descriptor.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        abbr: impl Into<String>,
        domain: StatDomain,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            abbr: abbr.into(),
            domain,
        }
    }
}

/// Ordered association list of stat key to descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatCatalog {
    entries: Vec<StatDescriptor>,
}

impl StatCatalog {
    /// Build a catalog from descriptors, keeping their order.
    pub fn new(entries: Vec<StatDescriptor>) -> Self {
        Self { entries }
    }

    /// The Grimwild stats: Brawn, Agility, Wits, Presence.
    pub fn grimwild() -> Self {
        Self::new(vec![
            StatDescriptor::new(
                "bra",
                "GRIMWILD.Stat.bra.long",
                "GRIMWILD.Stat.bra.abbr",
                StatDomain::Physical,
            ),
            StatDescriptor::new(
                "agi",
                "GRIMWILD.Stat.agi.long",
                "GRIMWILD.Stat.agi.abbr",
                StatDomain::Physical,
            ),
            StatDescriptor::new(
                "wit",
                "GRIMWILD.Stat.wit.long",
                "GRIMWILD.Stat.wit.abbr",
                StatDomain::Mental,
            ),
            StatDescriptor::new(
                "pre",
                "GRIMWILD.Stat.pre.long",
                "GRIMWILD.Stat.pre.abbr",
                StatDomain::Mental,
            ),
        ])
    }

    /// Parse a catalog from a JSON array of descriptors.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Look up a descriptor by key.
    pub fn get(&self, key: &str) -> Option<&StatDescriptor> {
        self.entries.iter().find(|d| d.key == key)
    }

    /// Returns true if the catalog defines `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Stat keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.key.as_str())
    }

    /// Descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &StatDescriptor> {
        self.entries.iter()
    }

    /// Number of stats in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog defines no stats.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Flattened roll data snapshot.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::derive::DerivedView;

/// Canonical values plus derived booleans, flattened for formula lookup.
///
/// Stat values sit directly under `stats` so a formula can refer to
/// `@stats.bra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollData {
    /// Experience.
    pub xp: u32,
    /// Level.
    pub lvl: u32,
    /// Stat values by key.
    pub stats: BTreeMap<String, u8>,
    /// Stat marks by key.
    pub marks: BTreeMap<String, bool>,
    /// Bloodied pool size.
    pub bloodied: u32,
    /// Rattled pool size.
    pub rattled: u32,
    /// Bloodied pool is active.
    pub is_bloodied: bool,
    /// Rattled pool is active.
    pub is_rattled: bool,
    /// Active condition count.
    pub active_conditions: u32,
    /// Filled spark steps.
    pub spark: u32,
    /// Filled story steps.
    pub story: u32,
}

impl RollData {
    /// Snapshot a derived view.
    pub fn from_view(view: &DerivedView) -> Self {
        Self {
            xp: view.experience,
            lvl: view.level,
            stats: view
                .stats
                .iter()
                .map(|s| (s.key.clone(), s.value))
                .collect(),
            marks: view
                .stats
                .iter()
                .map(|s| (s.key.clone(), s.marked))
                .collect(),
            bloodied: view.bloodied_dice,
            rattled: view.rattled_dice,
            is_bloodied: view.is_bloodied,
            is_rattled: view.is_rattled,
            active_conditions: view.active_conditions,
            spark: view.spark,
            story: view.story,
        }
    }

    /// The snapshot as a JSON object.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

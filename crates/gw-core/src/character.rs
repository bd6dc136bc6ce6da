//! The canonical character aggregate.
//!
//! Everything here is stored state. Level, step values, labels and padded
//! narrative views are derived by `gw-mechanics` on every pass and never
//! written back, except through the explicit normalization step.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::StatCatalog;
use crate::error::CoreResult;
use crate::pool::{Condition, StatusPool};

/// Highest value a stat may hold.
pub const STAT_MAX: u8 = 3;

/// Starting value for every stat on a fresh character.
pub const STAT_INITIAL: u8 = 1;

/// Number of steps on a fresh spark or story tracker.
pub const TRACKER_STEPS: usize = 2;

/// A single stat score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    /// Number of dice the stat contributes (0 to [`STAT_MAX`]).
    pub value: u8,
    /// Whether the stat is marked (less reliable until cleared).
    pub marked: bool,
}

impl Stat {
    /// Create an unmarked stat.
    pub fn new(value: u8) -> Self {
        Self {
            value,
            marked: false,
        }
    }
}

/// A row of fillable steps (spark, story).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepTracker {
    /// Step boxes; `true` means filled. Length is owned by the host.
    pub steps: Vec<bool>,
}

impl Default for StepTracker {
    fn default() -> Self {
        Self {
            steps: vec![false; TRACKER_STEPS],
        }
    }
}

impl StepTracker {
    /// Create a tracker from explicit step states.
    pub fn from_steps(steps: Vec<bool>) -> Self {
        Self { steps }
    }
}

/// A trait or desire line. `are` distinguishes "I am" from "I am not".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitEntry {
    /// True for an affirmative entry, false for a negated one.
    pub are: bool,
    /// Free text.
    pub value: String,
}

impl TraitEntry {
    /// Create an entry.
    pub fn new(are: bool, value: impl Into<String>) -> Self {
        Self {
            are,
            value: value.into(),
        }
    }
}

/// A background and the wises it grants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    /// Background name.
    pub name: String,
    /// Areas of expertise tied to the background.
    pub wises: Vec<String>,
}

/// A bond to another character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bond {
    /// Who the bond is with.
    pub name: String,
    /// What the bond means.
    pub description: String,
}

/// The canonical state of a player character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Free-text class (e.g. "Fighter").
    pub class: String,
    /// Experience earned so far.
    #[serde(alias = "xp")]
    pub experience: u32,
    /// Stat scores keyed by catalog key.
    pub stats: BTreeMap<String, Stat>,
    /// Physical harm pool.
    pub bloodied: StatusPool,
    /// Mental strain pool.
    pub rattled: StatusPool,
    /// Ongoing conditions in the order they were taken.
    pub conditions: Vec<Condition>,
    /// Spark tracker.
    pub spark: StepTracker,
    /// Story tracker.
    pub story: StepTracker,
    /// Traits, canonically three.
    pub traits: Vec<TraitEntry>,
    /// Desires, canonically three.
    pub desires: Vec<TraitEntry>,
    /// Backgrounds, canonically two.
    pub backgrounds: Vec<Background>,
    /// Bonds with other characters.
    pub bonds: Vec<Bond>,
    /// Free-text features.
    pub features: String,
}

impl Character {
    /// Create a fresh character with every catalog stat at its initial value.
    pub fn new(name: impl Into<String>, catalog: &StatCatalog) -> Self {
        let stats = catalog
            .keys()
            .map(|key| (key.to_string(), Stat::new(STAT_INITIAL)))
            .collect();
        Self {
            name: name.into(),
            stats,
            ..Self::default()
        }
    }

    /// Parse a character from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a character from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize the character as pretty JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of conditions currently weighing on rolls.
    pub fn active_conditions(&self) -> usize {
        self.conditions.iter().filter(|c| c.is_active()).count()
    }
}

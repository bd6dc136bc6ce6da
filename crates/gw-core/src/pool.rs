//! Countable dice pools (bloodied, rattled, conditions).
//!
//! A pool only stores how many dice it currently holds. Growing or
//! shrinking the pool is driven by game actions outside this crate; the
//! pool reports whether it is active so penalties can key off it.

use serde::{Deserialize, Serialize};

/// A non-negative count of dice backing a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPool {
    /// Number of dice currently in the pool.
    #[serde(default)]
    pub dice_num: u32,
}

impl StatusPool {
    /// Create a pool holding `dice_num` dice.
    pub fn new(dice_num: u32) -> Self {
        Self { dice_num }
    }

    /// Returns true while the pool holds at least one die.
    pub fn active(&self) -> bool {
        self.dice_num > 0
    }
}

impl std::fmt::Display for StatusPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.dice_num)
    }
}

/// How long a condition is expected to last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Must be dealt with immediately.
    Urgent,
    /// Clears within a scene or two.
    #[default]
    ShortTerm,
    /// Lingers across sessions.
    LongTerm,
    /// Never clears on its own.
    Permanent,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Urgent => write!(f, "urgent"),
            Self::ShortTerm => write!(f, "short-term"),
            Self::LongTerm => write!(f, "long-term"),
            Self::Permanent => write!(f, "permanent"),
        }
    }
}

/// A named status condition backed by its own dice pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Condition {
    /// Display name of the condition.
    pub name: String,
    /// Dice pool that ticks the condition down.
    pub pool: StatusPool,
    /// Expected duration.
    pub severity: Severity,
}

impl Condition {
    /// Create a condition with the given pool size and severity.
    pub fn new(name: impl Into<String>, dice_num: u32, severity: Severity) -> Self {
        Self {
            name: name.into(),
            pool: StatusPool::new(dice_num),
            severity,
        }
    }

    /// A condition weighs on rolls while its pool holds dice. Permanent
    /// conditions have nothing to tick down and always count.
    pub fn is_active(&self) -> bool {
        self.severity == Severity::Permanent || self.pool.active()
    }
}

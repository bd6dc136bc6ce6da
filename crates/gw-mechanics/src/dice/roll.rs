//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::{DiceTag, Die};

/// The result of rolling a single die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The tag on this die.
    pub tag: DiceTag,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Get all die results with a specific tag.
    pub fn by_tag(&self, tag: DiceTag) -> impl Iterator<Item = &DieResult> {
        self.dice.iter().filter(move |d| d.tag == tag)
    }

    /// The highest value among dice with a specific tag, or 0 if none.
    pub fn highest_by_tag(&self, tag: DiceTag) -> u32 {
        self.by_tag(tag).map(|d| d.value).max().unwrap_or(0)
    }

    /// Count dice with a specific tag rolling at or above `threshold`.
    pub fn count_at_or_above(&self, tag: DiceTag, threshold: u32) -> u32 {
        self.by_tag(tag).filter(|d| d.value >= threshold).count() as u32
    }

    /// Values of the dice with a specific tag, in roll order.
    pub fn values(&self, tag: DiceTag) -> Vec<u32> {
        self.by_tag(tag).map(|d| d.value).collect()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self
            .dice
            .iter()
            .map(|d| format!("{}:{}", d.die, d.value))
            .collect();
        write!(f, "[{}]", values.join(", "))
    }
}

//! Dice pool construction and rolling.

use rand::Rng;
use rand::rngs::StdRng;

use super::roll::{DieResult, RollResult};
use super::{DiceTag, Die};

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    /// The dice in this pool with their tags.
    pub dice: Vec<(Die, DiceTag)>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given type with a specific tag.
    pub fn add_tagged(mut self, die: Die, tag: DiceTag, count: u32) -> Self {
        self.dice
            .extend(std::iter::repeat_n((die, tag), count as usize));
        self
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll all dice in the pool using the given RNG.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        let dice = self
            .dice
            .iter()
            .map(|&(die, tag)| DieResult {
                die,
                tag,
                value: rng.random_range(1..=die.sides()),
            })
            .collect();
        RollResult { dice }
    }
}

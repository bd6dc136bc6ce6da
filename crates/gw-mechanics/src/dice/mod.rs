//! Dice types, pools, and rolling.
//!
//! The engine itself never rolls: it emits pool sizes. These types are the
//! shared vocabulary for formulas and for hosts that evaluate them. Dice
//! are tagged so a single mixed pool can carry both stat dice and thorns.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult};

use serde::{Deserialize, Serialize};

/// The dice a Grimwild roll uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided die. Stat dice.
    D6,
    /// Eight-sided die. Thorns.
    D8,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// What a die in a mixed pool stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceTag {
    /// A stat die; only the highest counts.
    Stat,
    /// A thorn; high results cut the outcome.
    Thorn,
}

impl std::fmt::Display for DiceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stat => write!(f, "stat"),
            Self::Thorn => write!(f, "thorn"),
        }
    }
}

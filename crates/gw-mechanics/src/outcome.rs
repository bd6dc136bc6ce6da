//! Reading a rolled stat/thorn pool.
//!
//! Only the highest stat die counts:
//! - two or more 6s: critical
//! - a 6: perfect
//! - 4 or 5: messy
//! - 1 to 3 (or no dice): grim
//!
//! Every thorn at or above `cut_min` cuts the result one tier down, and a
//! grim result that is cut becomes a disaster.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceTag, RollResult};

/// Result tiers, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Grim, and then cut.
    Disaster,
    /// Failure with a consequence.
    Grim,
    /// Success with a complication.
    Messy,
    /// Clean success.
    Perfect,
    /// Success with extra effect.
    Critical,
}

impl Outcome {
    /// One tier worse, bottoming out at disaster.
    pub fn cut(self) -> Self {
        match self {
            Self::Critical => Self::Perfect,
            Self::Perfect => Self::Messy,
            Self::Messy => Self::Grim,
            Self::Grim | Self::Disaster => Self::Disaster,
        }
    }

    /// Returns true for messy and better.
    pub fn is_success(self) -> bool {
        self >= Self::Messy
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disaster => write!(f, "Disaster"),
            Self::Grim => write!(f, "Grim"),
            Self::Messy => write!(f, "Messy"),
            Self::Perfect => write!(f, "Perfect"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Thresholds for reading a roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighestDie {
    /// Minimum highest stat die for a messy result (default: 4).
    pub messy_min: u32,
    /// Minimum highest stat die for a perfect result (default: 6).
    pub perfect_min: u32,
    /// Minimum thorn value that cuts (default: 7).
    pub cut_min: u32,
}

impl Default for HighestDie {
    fn default() -> Self {
        Self {
            messy_min: 4,
            perfect_min: 6,
            cut_min: 7,
        }
    }
}

/// A read roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// Highest stat die, or 0 for an empty pool.
    pub highest: u32,
    /// Result before thorns.
    pub base: Outcome,
    /// Number of thorns that cut.
    pub cuts: u32,
    /// Final result.
    pub outcome: Outcome,
}

impl HighestDie {
    /// Read a roll whose dice are tagged stat/thorn.
    pub fn read(&self, roll: &RollResult) -> Reading {
        let highest = roll.highest_by_tag(DiceTag::Stat);
        let perfects = roll.count_at_or_above(DiceTag::Stat, self.perfect_min);

        let base = if perfects >= 2 {
            Outcome::Critical
        } else if highest >= self.perfect_min {
            Outcome::Perfect
        } else if highest >= self.messy_min {
            Outcome::Messy
        } else {
            Outcome::Grim
        };

        let cuts = roll.count_at_or_above(DiceTag::Thorn, self.cut_min);
        let outcome = (0..cuts).fold(base, |o, _| o.cut());

        Reading {
            highest,
            base,
            cuts,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{Die, DieResult};

    fn make_roll(stat: &[u32], thorns: &[u32]) -> RollResult {
        let mut dice: Vec<DieResult> = stat
            .iter()
            .map(|&value| DieResult {
                die: Die::D6,
                tag: DiceTag::Stat,
                value,
            })
            .collect();
        dice.extend(thorns.iter().map(|&value| DieResult {
            die: Die::D8,
            tag: DiceTag::Thorn,
            value,
        }));
        RollResult { dice }
    }

    #[test]
    fn perfect() {
        let r = HighestDie::default().read(&make_roll(&[6, 2], &[3]));
        assert_eq!(r.highest, 6);
        assert_eq!(r.outcome, Outcome::Perfect);
        assert_eq!(r.cuts, 0);
    }

    #[test]
    fn critical_needs_two_sixes() {
        let r = HighestDie::default().read(&make_roll(&[6, 6, 1], &[]));
        assert_eq!(r.outcome, Outcome::Critical);
    }

    #[test]
    fn messy_and_grim() {
        let reader = HighestDie::default();
        assert_eq!(reader.read(&make_roll(&[4, 2], &[])).outcome, Outcome::Messy);
        assert_eq!(reader.read(&make_roll(&[3, 1], &[])).outcome, Outcome::Grim);
    }

    #[test]
    fn thorns_cut_the_result() {
        let reader = HighestDie::default();
        let r = reader.read(&make_roll(&[6], &[7, 2]));
        assert_eq!(r.base, Outcome::Perfect);
        assert_eq!(r.cuts, 1);
        assert_eq!(r.outcome, Outcome::Messy);

        let r = reader.read(&make_roll(&[5], &[8, 8]));
        assert_eq!(r.outcome, Outcome::Disaster);
    }

    #[test]
    fn empty_stat_pool_is_grim() {
        let r = HighestDie::default().read(&RollResult::default());
        assert_eq!(r.highest, 0);
        assert_eq!(r.outcome, Outcome::Grim);
    }

    #[test]
    fn cut_bottoms_out() {
        assert_eq!(Outcome::Disaster.cut(), Outcome::Disaster);
        assert!(Outcome::Messy.is_success());
        assert!(!Outcome::Grim.is_success());
    }
}

//! Experience, level, and step trackers.
//!
//! Level is never stored. It is read off a single threshold sequence
//! (2, 5, 9, 14, 20, 27, ...), each gap one larger than the last. The
//! xp-pip layout shown on the sheet is the same sequence cut into rows,
//! so both are driven by [`LevelThresholds`].

/// Number of rows in the xp-pip layout.
pub const XP_PIP_ROWS: usize = 6;

/// Cumulative experience needed for each level after the first.
#[derive(Debug, Clone)]
pub struct LevelThresholds {
    step: u64,
    threshold: u64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            step: 2,
            threshold: 2,
        }
    }
}

impl Iterator for LevelThresholds {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.threshold;
        self.step += 1;
        self.threshold += self.step;
        Some(current)
    }
}

/// Iterate the level thresholds from the first (2 xp for level 2).
pub fn thresholds() -> LevelThresholds {
    LevelThresholds::default()
}

/// Level reached with `experience` xp. Always at least 1.
pub fn level_of(experience: u32) -> u32 {
    let xp = u64::from(experience);
    let passed = thresholds().take_while(|&t| t <= xp).count();
    1 + passed as u32
}

/// Sheet layout of xp pips: row `i` holds `i + 2` consecutive pip numbers,
/// counting from 1. The last pip of each row is a level threshold.
pub fn xp_pip_layout() -> Vec<Vec<u32>> {
    let mut previous = 0;
    thresholds()
        .take(XP_PIP_ROWS)
        .map(|threshold| {
            let row = (previous + 1..=threshold).map(|v| v as u32).collect();
            previous = threshold;
            row
        })
        .collect()
}

/// Number of filled steps on a spark or story tracker.
pub fn count_filled(steps: &[bool]) -> usize {
    steps.iter().filter(|&&s| s).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Straight loop over running step/threshold counters.
    fn level_by_loop(experience: u32) -> u32 {
        if experience < 2 {
            return 1;
        }
        let xp = u64::from(experience);
        let mut step: u64 = 2;
        let mut threshold: u64 = 2;
        while xp >= threshold {
            step += 1;
            threshold += step;
        }
        (step - 1) as u32
    }

    #[test]
    fn known_levels() {
        assert_eq!(level_of(0), 1);
        assert_eq!(level_of(1), 1);
        assert_eq!(level_of(2), 2);
        assert_eq!(level_of(4), 2);
        assert_eq!(level_of(5), 3);
        assert_eq!(level_of(8), 3);
        assert_eq!(level_of(9), 4);
        assert_eq!(level_of(14), 5);
        assert_eq!(level_of(20), 6);
        assert_eq!(level_of(26), 6);
        assert_eq!(level_of(27), 7);
    }

    #[test]
    fn threshold_sequence() {
        let t: Vec<u64> = thresholds().take(7).collect();
        assert_eq!(t, vec![2, 5, 9, 14, 20, 27, 35]);
    }

    #[test]
    fn max_experience_terminates() {
        assert!(level_of(u32::MAX) > 1);
    }

    #[test]
    fn pip_layout_rows() {
        let layout = xp_pip_layout();
        assert_eq!(layout.len(), XP_PIP_ROWS);
        let lengths: Vec<usize> = layout.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(layout[0], vec![1, 2]);
        assert_eq!(layout[1], vec![3, 4, 5]);
        assert_eq!(layout[5], vec![21, 22, 23, 24, 25, 26, 27]);
        let flat: Vec<u32> = layout.into_iter().flatten().collect();
        assert_eq!(flat, (1..=27).collect::<Vec<_>>());
    }

    #[test]
    fn pip_rows_end_on_thresholds() {
        let ends: Vec<u64> = xp_pip_layout()
            .iter()
            .filter_map(|row| row.last().map(|&v| u64::from(v)))
            .collect();
        let expected: Vec<u64> = thresholds().take(XP_PIP_ROWS).collect();
        assert_eq!(ends, expected);
    }

    #[test]
    fn pip_layout_is_constant() {
        assert_eq!(xp_pip_layout(), xp_pip_layout());
    }

    #[test]
    fn count_filled_steps() {
        assert_eq!(count_filled(&[]), 0);
        assert_eq!(count_filled(&[true, false]), 1);
        assert_eq!(count_filled(&[true, true, false, true]), 3);
    }

    proptest! {
        #[test]
        fn matches_running_counter_loop(xp in 0u32..100_000) {
            prop_assert_eq!(level_of(xp), level_by_loop(xp));
        }

        #[test]
        fn level_is_monotonic(xp in 0u32..100_000) {
            prop_assert!(level_of(xp) >= 1);
            prop_assert!(level_of(xp + 1) >= level_of(xp));
        }

        #[test]
        fn filled_count_matches_trues(steps in proptest::collection::vec(any::<bool>(), 0..16)) {
            let expected = steps.iter().filter(|s| **s).count();
            prop_assert_eq!(count_filled(&steps), expected);
            prop_assert_eq!(count_filled(&steps), count_filled(&steps));
        }
    }
}

//! Normalization of the narrative collections.
//!
//! Traits, desires, backgrounds and wises have a canonical length. Short
//! collections are padded with default entries; entries already present
//! are never replaced, reordered or removed, and longer collections are
//! left as they are.

use gw_core::{Background, Character, TraitEntry};

/// Canonical number of traits.
pub const TRAIT_SLOTS: usize = 3;
/// Canonical number of desires.
pub const DESIRE_SLOTS: usize = 3;
/// Canonical number of backgrounds.
pub const BACKGROUND_SLOTS: usize = 2;
/// Canonical number of wises per background.
pub const WISE_SLOTS: usize = 3;

/// Pad `items` to at least `len` entries, building each new entry from its
/// index. Returns true if anything was appended.
pub fn normalize<T>(items: &mut Vec<T>, len: usize, default: impl Fn(usize) -> T) -> bool {
    let start = items.len();
    items.extend((start..len).map(default));
    items.len() > start
}

/// Default trait or desire for slot `index`: the first two are "are"
/// entries, the rest "are not".
pub fn default_trait(index: usize) -> TraitEntry {
    TraitEntry::new(index < 2, "")
}

/// Default background with empty wises.
pub fn default_background(_index: usize) -> Background {
    Background {
        name: String::new(),
        wises: vec![String::new(); WISE_SLOTS],
    }
}

/// Pad the background list and every background's wises.
pub fn normalize_backgrounds(backgrounds: &mut Vec<Background>) -> bool {
    let mut changed = normalize(backgrounds, BACKGROUND_SLOTS, default_background);
    for background in backgrounds.iter_mut() {
        changed |= normalize(&mut background.wises, WISE_SLOTS, |_| String::new());
    }
    changed
}

/// Pad every narrative collection on a character in place. Returns true
/// if the canonical state changed.
pub fn ensure_defaults(character: &mut Character) -> bool {
    let traits = normalize(&mut character.traits, TRAIT_SLOTS, default_trait);
    let desires = normalize(&mut character.desires, DESIRE_SLOTS, default_trait);
    let backgrounds = normalize_backgrounds(&mut character.backgrounds);
    traits || desires || backgrounds
}

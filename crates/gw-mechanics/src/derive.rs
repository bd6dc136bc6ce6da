//! Derived view of a character.
//!
//! [`derive`] is a pure function of canonical state plus configuration. It
//! never writes to the character; padded narrative collections appear only
//! in the returned view. Calling it twice on unchanged state returns equal
//! views.

use gw_core::{Background, Bond, Character, StatDomain, TraitEntry};
use serde::Serialize;
use tracing::{debug, warn};

use crate::context::EngineContext;
use crate::narrative::{
    DESIRE_SLOTS, TRAIT_SLOTS, default_trait, normalize, normalize_backgrounds,
};
use crate::progression::{count_filled, level_of, xp_pip_layout};

/// Display priority of the canonical stat keys; anything else sorts last.
pub const STAT_PRIORITY: [&str; 4] = ["bra", "agi", "wit", "pre"];

/// A stat with its display strings attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStat {
    /// Canonical key.
    pub key: String,
    /// Stat value.
    pub value: u8,
    /// Whether the stat is marked.
    pub marked: bool,
    /// Localized label, or the raw key.
    pub label: String,
    /// Localized abbreviation, or the raw key.
    pub abbr: String,
    /// Classification, when the catalog knows the stat.
    pub domain: Option<StatDomain>,
}

/// Everything the sheet shows that is not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedView {
    /// Character name.
    pub name: String,
    /// Experience, as stored.
    pub experience: u32,
    /// Level read off the experience thresholds.
    pub level: u32,
    /// Xp pip rows for the sheet.
    pub xp_pips: Vec<Vec<u32>>,
    /// Stats in catalog order, unknown keys last.
    pub stats: Vec<DerivedStat>,
    /// Bloodied pool holds dice.
    pub is_bloodied: bool,
    /// Rattled pool holds dice.
    pub is_rattled: bool,
    /// Bloodied pool size.
    pub bloodied_dice: u32,
    /// Rattled pool size.
    pub rattled_dice: u32,
    /// Conditions currently weighing on rolls.
    pub active_conditions: u32,
    /// Filled spark steps.
    pub spark: u32,
    /// Filled story steps.
    pub story: u32,
    /// Traits padded to canonical length.
    pub traits: Vec<TraitEntry>,
    /// Desires padded to canonical length.
    pub desires: Vec<TraitEntry>,
    /// Backgrounds and wises padded to canonical length.
    pub backgrounds: Vec<Background>,
    /// Bonds, unchanged.
    pub bonds: Vec<Bond>,
}

impl DerivedView {
    /// Look up a derived stat by key.
    pub fn stat(&self, key: &str) -> Option<&DerivedStat> {
        self.stats.iter().find(|s| s.key == key)
    }

    /// Stats sorted by [`STAT_PRIORITY`], ties kept in view order.
    pub fn ordered_stats(&self) -> Vec<&DerivedStat> {
        let mut ordered: Vec<&DerivedStat> = self.stats.iter().collect();
        ordered.sort_by_key(|s| stat_priority(&s.key));
        ordered
    }
}

/// Sort rank of a stat key.
pub fn stat_priority(key: &str) -> usize {
    STAT_PRIORITY
        .iter()
        .position(|&k| k == key)
        .unwrap_or(STAT_PRIORITY.len())
}

/// Build the derived view of `character`.
pub fn derive(character: &Character, ctx: &EngineContext<'_>) -> DerivedView {
    let mut stats = Vec::with_capacity(character.stats.len());

    for descriptor in ctx.catalog.iter() {
        let Some(stat) = character.stats.get(&descriptor.key) else {
            continue;
        };
        stats.push(DerivedStat {
            key: descriptor.key.clone(),
            value: stat.value,
            marked: stat.marked,
            label: ctx.localizer.localize_or(&descriptor.label, &descriptor.key),
            abbr: ctx.localizer.localize_or(&descriptor.abbr, &descriptor.key),
            domain: Some(descriptor.domain),
        });
    }

    // Stats the catalog does not know keep their raw key as label.
    for (key, stat) in &character.stats {
        if ctx.catalog.contains(key) {
            continue;
        }
        warn!(stat = %key, "no catalog entry for stat, using raw key");
        stats.push(DerivedStat {
            key: key.clone(),
            value: stat.value,
            marked: stat.marked,
            label: key.clone(),
            abbr: key.clone(),
            domain: None,
        });
    }

    let mut traits = character.traits.clone();
    normalize(&mut traits, TRAIT_SLOTS, default_trait);
    let mut desires = character.desires.clone();
    normalize(&mut desires, DESIRE_SLOTS, default_trait);
    let mut backgrounds = character.backgrounds.clone();
    normalize_backgrounds(&mut backgrounds);

    let view = DerivedView {
        name: character.name.clone(),
        experience: character.experience,
        level: level_of(character.experience),
        xp_pips: xp_pip_layout(),
        stats,
        is_bloodied: character.bloodied.active(),
        is_rattled: character.rattled.active(),
        bloodied_dice: character.bloodied.dice_num,
        rattled_dice: character.rattled.dice_num,
        active_conditions: character.active_conditions() as u32,
        spark: count_filled(&character.spark.steps) as u32,
        story: count_filled(&character.story.steps) as u32,
        traits,
        desires,
        backgrounds,
        bonds: character.bonds.clone(),
    };

    debug!(
        character = %view.name,
        level = view.level,
        bloodied = view.is_bloodied,
        rattled = view.is_rattled,
        "derived character view"
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::{
        Condition, JsonLocalizer, Severity, Stat, StatCatalog, StatusPool, StepTracker,
    };

    fn translations() -> JsonLocalizer {
        JsonLocalizer::from_json(
            r#"{"GRIMWILD": {"Stat": {
                "bra": {"long": "Brawn", "abbr": "BRA"},
                "agi": {"long": "Agility", "abbr": "AGI"},
                "wit": {"long": "Wits"}
            }}}"#,
        )
        .unwrap()
    }

    fn sample() -> Character {
        let mut c = Character::new("Vesna", &StatCatalog::grimwild());
        c.experience = 6;
        c.bloodied = StatusPool::new(2);
        c.spark = StepTracker::from_steps(vec![true, false]);
        c.story = StepTracker::from_steps(vec![true, true]);
        c.conditions = vec![
            Condition::new("Bleeding", 1, Severity::Urgent),
            Condition::new("Spent", 0, Severity::ShortTerm),
        ];
        c
    }

    #[test]
    fn labels_resolve_through_localizer() {
        let catalog = StatCatalog::grimwild();
        let l = translations();
        let view = derive(&sample(), &EngineContext::new(&catalog, &l));
        let bra = view.stat("bra").unwrap();
        assert_eq!(bra.label, "Brawn");
        assert_eq!(bra.abbr, "BRA");
        // partially translated
        let wit = view.stat("wit").unwrap();
        assert_eq!(wit.label, "Wits");
        assert_eq!(wit.abbr, "wit");
        // untranslated
        assert_eq!(view.stat("pre").unwrap().label, "pre");
    }

    #[test]
    fn stats_follow_catalog_order() {
        let catalog = StatCatalog::grimwild();
        let view = derive(&sample(), &EngineContext::unlocalized(&catalog));
        let keys: Vec<&str> = view.stats.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["bra", "agi", "wit", "pre"]);
    }

    #[test]
    fn unknown_stat_falls_back_to_raw_key() {
        let catalog = StatCatalog::grimwild();
        let mut c = sample();
        c.stats.insert("luck".to_string(), Stat::new(2));
        let view = derive(&c, &EngineContext::unlocalized(&catalog));
        let luck = view.stat("luck").unwrap();
        assert_eq!(luck.label, "luck");
        assert_eq!(luck.abbr, "luck");
        assert_eq!(luck.domain, None);
        assert_eq!(view.stats.last().unwrap().key, "luck");
    }

    #[test]
    fn derived_counters() {
        let catalog = StatCatalog::grimwild();
        let view = derive(&sample(), &EngineContext::unlocalized(&catalog));
        assert_eq!(view.level, 3);
        assert!(view.is_bloodied);
        assert!(!view.is_rattled);
        assert_eq!(view.bloodied_dice, 2);
        assert_eq!(view.active_conditions, 1);
        assert_eq!(view.spark, 1);
        assert_eq!(view.story, 2);
        assert_eq!(view.xp_pips.len(), 6);
    }

    #[test]
    fn view_is_padded_but_character_is_not() {
        let catalog = StatCatalog::grimwild();
        let c = sample();
        let before = c.clone();
        let view = derive(&c, &EngineContext::unlocalized(&catalog));
        assert_eq!(view.traits.len(), 3);
        assert_eq!(view.desires.len(), 3);
        assert_eq!(view.backgrounds.len(), 2);
        assert!(view.backgrounds.iter().all(|b| b.wises.len() == 3));
        assert_eq!(c, before);
    }

    #[test]
    fn derive_is_idempotent() {
        let catalog = StatCatalog::grimwild();
        let l = translations();
        let ctx = EngineContext::new(&catalog, &l);
        let c = sample();
        assert_eq!(derive(&c, &ctx), derive(&c, &ctx));
    }

    #[test]
    fn ordered_stats_uses_fixed_priority() {
        let catalog = StatCatalog::new(vec![
            gw_core::StatDescriptor::new("pre", "p", "p", StatDomain::Mental),
            gw_core::StatDescriptor::new("zeal", "z", "z", StatDomain::Mental),
            gw_core::StatDescriptor::new("bra", "b", "b", StatDomain::Physical),
            gw_core::StatDescriptor::new("grit", "g", "g", StatDomain::Physical),
            gw_core::StatDescriptor::new("wit", "w", "w", StatDomain::Mental),
        ]);
        let c = Character::new("Order", &catalog);
        let view = derive(&c, &EngineContext::unlocalized(&catalog));
        let keys: Vec<&str> = view.ordered_stats().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["bra", "wit", "pre", "zeal", "grit"]);
    }

    #[test]
    fn priority_ranks() {
        assert_eq!(stat_priority("bra"), 0);
        assert_eq!(stat_priority("agi"), 1);
        assert_eq!(stat_priority("wit"), 2);
        assert_eq!(stat_priority("pre"), 3);
        assert_eq!(stat_priority("anything"), 4);
    }
}

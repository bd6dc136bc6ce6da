//! Host-facing operations on a character.

use std::future::Future;

use gw_core::Character;

use crate::context::EngineContext;
use crate::derive::{DerivedView, derive};
use crate::error::MechResult;
use crate::narrative;
use crate::roll::{self, InteractionCollector, RollData, RollOptions, RollRequest};

/// The lifecycle hooks a host calls on a character.
pub trait CharacterEngine {
    /// Rebuild the derived view. Leaves canonical state untouched.
    fn prepare_derived_data(&self, ctx: &EngineContext<'_>) -> DerivedView;

    /// Pad narrative collections to canonical length in place. Returns
    /// true if anything was added.
    fn ensure_defaults(&mut self) -> bool;

    /// Flattened snapshot for formula lookup.
    fn roll_data(&self, ctx: &EngineContext<'_>) -> RollData;

    /// Prompt for and assemble a roll of `stat_key`.
    fn roll(
        &self,
        stat_key: &str,
        options: &RollOptions,
        ctx: &EngineContext<'_>,
        collector: &dyn InteractionCollector,
    ) -> impl Future<Output = MechResult<RollRequest>> + Send;
}

impl CharacterEngine for Character {
    fn prepare_derived_data(&self, ctx: &EngineContext<'_>) -> DerivedView {
        derive(self, ctx)
    }

    fn ensure_defaults(&mut self) -> bool {
        narrative::ensure_defaults(self)
    }

    fn roll_data(&self, ctx: &EngineContext<'_>) -> RollData {
        RollData::from_view(&derive(self, ctx))
    }

    fn roll(
        &self,
        stat_key: &str,
        options: &RollOptions,
        ctx: &EngineContext<'_>,
        collector: &dyn InteractionCollector,
    ) -> impl Future<Output = MechResult<RollRequest>> + Send {
        roll::resolve(self, stat_key, options, ctx, collector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechError;
    use crate::roll::AcceptDefaults;
    use gw_core::{StatCatalog, StatusPool};

    #[test]
    fn prepare_is_side_effect_free() {
        let catalog = StatCatalog::grimwild();
        let ctx = EngineContext::unlocalized(&catalog);
        let c = Character::new("Vesna", &catalog);
        let before = c.clone();
        let first = c.prepare_derived_data(&ctx);
        let second = c.prepare_derived_data(&ctx);
        assert_eq!(first, second);
        assert_eq!(c, before);
    }

    #[test]
    fn ensure_defaults_then_prepare_agree() {
        let catalog = StatCatalog::grimwild();
        let ctx = EngineContext::unlocalized(&catalog);
        let mut c = Character::new("Vesna", &catalog);
        let view = c.prepare_derived_data(&ctx);
        assert!(c.ensure_defaults());
        assert_eq!(c.traits, view.traits);
        assert_eq!(c.backgrounds, view.backgrounds);
    }

    #[test]
    fn roll_data_reflects_pools() {
        let catalog = StatCatalog::grimwild();
        let ctx = EngineContext::unlocalized(&catalog);
        let mut c = Character::new("Vesna", &catalog);
        c.bloodied = StatusPool::new(3);
        let data = c.roll_data(&ctx);
        assert_eq!(data.bloodied, 3);
        assert!(data.is_bloodied);
        assert_eq!(data.stats.len(), 4);
    }

    #[tokio::test]
    async fn roll_entry_point() {
        let catalog = StatCatalog::grimwild();
        let ctx = EngineContext::unlocalized(&catalog);
        let c = Character::new("Vesna", &catalog);
        let request = c
            .roll("bra", &RollOptions::default(), &ctx, &AcceptDefaults)
            .await
            .unwrap();
        assert_eq!(request.context.stat_dice, 1);
        let err = c
            .roll("nope", &RollOptions::default(), &ctx, &AcceptDefaults)
            .await
            .unwrap_err();
        assert!(matches!(err, MechError::InvalidStat(_)));
    }
}

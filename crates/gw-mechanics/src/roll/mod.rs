//! Roll assembly.
//!
//! A roll is a keep-highest pool of d6 stat dice next to a pool of d8
//! thorns. The resolver works out both pool sizes from the character, the
//! player's answers and the penalty rules, and hands back a formula plus
//! the data it refers to. It never rolls.
//!
//! Penalties: a marked stat adds a thorn, a physical roll while bloodied
//! adds one, and a mental roll while rattled adds one. When bloodied or
//! rattled already applies to the roll, the mark on that stat is ignored
//! so the two penalties never stack.

pub mod data;
pub mod prompt;

pub use data::RollData;
pub use prompt::{
    AcceptDefaults, Assist, InteractionCollector, InteractionResponse, RollOptions, RollPrompt,
    THORN_BLOODIED, THORN_MARKED, THORN_RATTLED, ThornCheck,
};

use gw_core::{Character, StatDomain};
use serde::Serialize;
use tracing::{debug, info};

use crate::context::EngineContext;
use crate::derive::derive;
use crate::dice::{DicePool, DiceTag, Die};
use crate::error::{MechError, MechResult};

/// Roll formula; `@statDice` and `@thorns` resolve from the roll context.
pub const FORMULA: &str = "{(@statDice)d6kh, (@thorns)d8}";

/// Die used for stat dice.
pub const STAT_DIE: Die = Die::D6;

/// Die used for thorns.
pub const THORN_DIE: Die = Die::D8;

/// Data the formula is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollContext {
    /// Stat key rolled.
    pub stat: String,
    /// Display label of the stat.
    pub stat_label: String,
    /// Physical or mental, when known.
    pub domain: Option<StatDomain>,
    /// Size of the keep-highest d6 pool.
    pub stat_dice: u32,
    /// Size of the d8 thorn pool.
    pub thorns: u32,
    /// Difficulty chosen.
    pub difficulty: u32,
    /// Conditions counted as thorns.
    pub condition_thorns: u32,
    /// Assists that fed the stat pool.
    pub assists: Vec<Assist>,
    /// Checklist boxes that added thorns.
    pub thorn_sources: Vec<String>,
    /// Stat is marked.
    pub is_marked: bool,
    /// Mark penalty suppressed.
    pub mark_ignored: bool,
    /// Character snapshot at invocation.
    #[serde(flatten)]
    pub data: RollData,
}

/// A formula ready for an external dice evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollRequest {
    /// Formula with `@` references into `context`.
    pub formula: String,
    /// Values the formula refers to.
    pub context: RollContext,
}

impl RollRequest {
    /// The formula with its references substituted, e.g. `{5d6kh, 6d8}`.
    pub fn resolved_formula(&self) -> String {
        format!(
            "{{{}{}kh, {}{}}}",
            self.context.stat_dice, STAT_DIE, self.context.thorns, THORN_DIE
        )
    }

    /// The tagged pool an evaluator should roll.
    pub fn dice_pool(&self) -> DicePool {
        DicePool::new()
            .add_tagged(STAT_DIE, DiceTag::Stat, self.context.stat_dice)
            .add_tagged(THORN_DIE, DiceTag::Thorn, self.context.thorns)
    }
}

/// Whether bloodied/rattled overrides the mark on this roll.
pub fn mark_ignored(
    marked: bool,
    domain: Option<StatDomain>,
    is_bloodied: bool,
    is_rattled: bool,
) -> bool {
    marked
        && match domain {
            Some(StatDomain::Physical) => is_bloodied,
            Some(StatDomain::Mental) => is_rattled,
            None => false,
        }
}

/// Stat dice plus every assist. Saturates at `u32::MAX`.
pub fn aggregate_dice(stat_value: u32, assists: &[Assist]) -> u32 {
    assists
        .iter()
        .fold(stat_value, |total, a| total.saturating_add(a.dice))
}

/// One thorn per ticked box, per point of difficulty, and per condition.
pub fn aggregate_thorns(checklist: &[ThornCheck], difficulty: u32, active_conditions: u32) -> u32 {
    let checked = checklist.iter().filter(|c| c.checked).count();
    let checked = u32::try_from(checked).unwrap_or(u32::MAX);
    checked
        .saturating_add(difficulty)
        .saturating_add(active_conditions)
}

/// Default checklist for a roll.
pub fn default_checklist(
    is_marked: bool,
    mark_ignored: bool,
    domain: Option<StatDomain>,
    is_bloodied: bool,
    is_rattled: bool,
) -> Vec<ThornCheck> {
    vec![
        ThornCheck::new(THORN_MARKED, is_marked && !mark_ignored),
        ThornCheck::new(
            THORN_BLOODIED,
            is_bloodied && domain == Some(StatDomain::Physical),
        ),
        ThornCheck::new(
            THORN_RATTLED,
            is_rattled && domain == Some(StatDomain::Mental),
        ),
    ]
}

/// Resolve a roll of `stat_key` for `character`.
///
/// Everything the roll depends on is captured before the collector is
/// awaited. A cancelled interaction yields [`MechError::Cancelled`] and
/// produces nothing.
pub async fn resolve(
    character: &Character,
    stat_key: &str,
    options: &RollOptions,
    ctx: &EngineContext<'_>,
    collector: &dyn InteractionCollector,
) -> MechResult<RollRequest> {
    let view = derive(character, ctx);
    let Some(stat) = view.stat(stat_key).cloned() else {
        debug!(stat = %stat_key, "roll requested for unknown stat");
        return Err(MechError::InvalidStat(stat_key.to_string()));
    };
    let data = RollData::from_view(&view);

    let ignored = mark_ignored(stat.marked, stat.domain, view.is_bloodied, view.is_rattled);
    let checklist = default_checklist(
        stat.marked,
        ignored,
        stat.domain,
        view.is_bloodied,
        view.is_rattled,
    );
    let prompt = RollPrompt {
        stat: stat.key.clone(),
        stat_label: stat.label.clone(),
        domain: stat.domain,
        dice_default: aggregate_dice(u32::from(stat.value), &options.assists),
        thorns_default: aggregate_thorns(&checklist, options.difficulty, view.active_conditions),
        difficulty: options.difficulty,
        active_conditions: view.active_conditions,
        checklist,
        assists: options.assists.clone(),
        is_bloodied: view.is_bloodied,
        is_rattled: view.is_rattled,
        is_marked: stat.marked,
        mark_ignored: ignored,
    };
    debug!(
        stat = %prompt.stat,
        dice = prompt.dice_default,
        thorns = prompt.thorns_default,
        mark_ignored = ignored,
        "prompting for roll"
    );

    let Some(response) = collector.collect(&prompt).await else {
        info!(character = %view.name, stat = %stat_key, "roll cancelled");
        return Err(MechError::Cancelled);
    };

    let stat_dice = aggregate_dice(u32::from(stat.value), &response.assists);
    let thorns = aggregate_thorns(
        &response.checklist,
        response.difficulty,
        response.active_conditions,
    );

    let request = RollRequest {
        formula: FORMULA.to_string(),
        context: RollContext {
            stat: stat.key,
            stat_label: stat.label,
            domain: stat.domain,
            stat_dice,
            thorns,
            difficulty: response.difficulty,
            condition_thorns: response.active_conditions,
            thorn_sources: response.checked_labels(),
            assists: response.assists,
            is_marked: stat.marked,
            mark_ignored: ignored,
            data,
        },
    };
    info!(
        character = %view.name,
        stat = %request.context.stat,
        formula = %request.resolved_formula(),
        "roll assembled"
    );
    Ok(request)
}

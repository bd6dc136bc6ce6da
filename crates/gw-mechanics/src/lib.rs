//! Grimwild character engine.
//!
//! Derives level, step values, labels and padded narrative collections
//! from canonical character state, and assembles stat rolls: a
//! keep-highest d6 pool next to a d8 thorn pool, with the bloodied /
//! rattled / marked penalty rules applied. The engine emits formulas and
//! their data; rolling them is left to the host.

pub mod context;
pub mod derive;
pub mod dice;
pub mod engine;
pub mod error;
pub mod narrative;
pub mod outcome;
pub mod progression;
pub mod roll;
pub mod validate;

pub use context::EngineContext;
pub use derive::{DerivedStat, DerivedView, derive};
pub use dice::{DicePool, DiceTag, Die, DieResult, RollResult};
pub use engine::CharacterEngine;
pub use error::{MechError, MechResult};
pub use outcome::{HighestDie, Outcome, Reading};
pub use progression::{count_filled, level_of, xp_pip_layout};
pub use roll::{
    AcceptDefaults, Assist, InteractionCollector, InteractionResponse, RollContext, RollData,
    RollOptions, RollPrompt, RollRequest, ThornCheck, resolve,
};
pub use validate::{ValidationIssue, validate_character};

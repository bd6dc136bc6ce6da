//! The interaction seam between the resolver and whatever asks the player.
//!
//! The resolver sends one [`RollPrompt`] and awaits one
//! [`InteractionResponse`]. A collector returning `None` cancels the roll.

use async_trait::async_trait;
use gw_core::StatDomain;
use serde::{Deserialize, Serialize};

/// Checklist label for a marked stat.
pub const THORN_MARKED: &str = "marked";
/// Checklist label for a bloodied physical roll.
pub const THORN_BLOODIED: &str = "bloodied";
/// Checklist label for a rattled mental roll.
pub const THORN_RATTLED: &str = "rattled";

/// A named contribution of extra stat dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assist {
    /// Who is helping.
    pub name: String,
    /// Dice added to the stat pool.
    pub dice: u32,
}

impl Assist {
    /// Create an assist.
    pub fn new(name: impl Into<String>, dice: u32) -> Self {
        Self {
            name: name.into(),
            dice,
        }
    }
}

/// One box on the thorn checklist; each checked box adds a thorn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThornCheck {
    /// What the box stands for.
    pub label: String,
    /// Whether it is ticked.
    pub checked: bool,
}

impl ThornCheck {
    /// Create a checklist box.
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
        }
    }
}

/// Caller-supplied presets for a roll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollOptions {
    /// Difficulty to prefill.
    pub difficulty: u32,
    /// Assists to prefill.
    pub assists: Vec<Assist>,
}

/// What the collector shows the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollPrompt {
    /// Stat key being rolled.
    pub stat: String,
    /// Display label of the stat.
    pub stat_label: String,
    /// Physical or mental, when known.
    pub domain: Option<StatDomain>,
    /// Stat dice plus the prefilled assists.
    pub dice_default: u32,
    /// Thorns if the defaults are accepted.
    pub thorns_default: u32,
    /// Prefilled difficulty.
    pub difficulty: u32,
    /// Prefilled active condition count.
    pub active_conditions: u32,
    /// Default thorn checklist.
    pub checklist: Vec<ThornCheck>,
    /// Prefilled assists.
    pub assists: Vec<Assist>,
    /// Character is bloodied.
    pub is_bloodied: bool,
    /// Character is rattled.
    pub is_rattled: bool,
    /// Stat is marked.
    pub is_marked: bool,
    /// Mark penalty is suppressed by bloodied/rattled.
    pub mark_ignored: bool,
}

impl RollPrompt {
    /// The response a player gives by accepting every default.
    pub fn accept(&self) -> InteractionResponse {
        InteractionResponse {
            difficulty: self.difficulty,
            checklist: self.checklist.clone(),
            active_conditions: self.active_conditions,
            assists: self.assists.clone(),
        }
    }
}

/// What the player settled on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionResponse {
    /// Chosen difficulty; each point is a thorn.
    pub difficulty: u32,
    /// Thorn checklist as submitted.
    pub checklist: Vec<ThornCheck>,
    /// Active conditions; each is a thorn.
    pub active_conditions: u32,
    /// Assists; each adds its dice to the stat pool.
    pub assists: Vec<Assist>,
}

impl InteractionResponse {
    /// Set a checklist box, adding it if absent.
    pub fn set_check(&mut self, label: &str, checked: bool) {
        match self.checklist.iter_mut().find(|c| c.label == label) {
            Some(check) => check.checked = checked,
            None => self.checklist.push(ThornCheck::new(label, checked)),
        }
    }

    /// Labels of the ticked boxes.
    pub fn checked_labels(&self) -> Vec<String> {
        self.checklist
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.label.clone())
            .collect()
    }
}

/// Collects the roll interaction from the player.
#[async_trait]
pub trait InteractionCollector: Send + Sync {
    /// Present `prompt` and wait for an answer. `None` means the player
    /// backed out.
    async fn collect(&self, prompt: &RollPrompt) -> Option<InteractionResponse>;
}

/// Accepts every prompt as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaults;

#[async_trait]
impl InteractionCollector for AcceptDefaults {
    async fn collect(&self, prompt: &RollPrompt) -> Option<InteractionResponse> {
        Some(prompt.accept())
    }
}

//! Validation of character state against the stat catalog.
//!
//! Runs at the boundary where a host accepts edited state. Errors are
//! states the engine will not interpret sensibly; warnings are states
//! that [`ensure_defaults`](crate::narrative::ensure_defaults) or a host
//! edit can heal.

use gw_core::character::{STAT_MAX, TRACKER_STEPS};
use gw_core::{Character, StatCatalog};

use crate::narrative::{BACKGROUND_SLOTS, DESIRE_SLOTS, TRAIT_SLOTS, WISE_SLOTS};

/// A warning or error found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The field path where the issue was found.
    pub field: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.field, self.message)
    }
}

/// Validate a character against a catalog. Returns every issue found.
pub fn validate_character(character: &Character, catalog: &StatCatalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    validate_stats(character, catalog, &mut issues);
    validate_collections(character, &mut issues);
    validate_trackers(character, &mut issues);
    issues
}

/// Returns true if any issue is an error.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.is_error)
}

fn validate_stats(character: &Character, catalog: &StatCatalog, issues: &mut Vec<ValidationIssue>) {
    for (key, stat) in &character.stats {
        if !catalog.contains(key) {
            issues.push(ValidationIssue::error(
                format!("stats.{key}"),
                "stat is not in the catalog",
            ));
        }
        if stat.value > STAT_MAX {
            issues.push(ValidationIssue::error(
                format!("stats.{key}.value"),
                format!("value {} exceeds maximum {STAT_MAX}", stat.value),
            ));
        }
    }

    for key in catalog.keys() {
        if !character.stats.contains_key(key) {
            issues.push(ValidationIssue::warning(
                format!("stats.{key}"),
                "catalog stat missing on character",
            ));
        }
    }
}

fn validate_collections(character: &Character, issues: &mut Vec<ValidationIssue>) {
    let short = [
        ("traits", character.traits.len(), TRAIT_SLOTS),
        ("desires", character.desires.len(), DESIRE_SLOTS),
        ("backgrounds", character.backgrounds.len(), BACKGROUND_SLOTS),
    ];
    for (field, len, canonical) in short {
        if len < canonical {
            issues.push(ValidationIssue::warning(
                field,
                format!("{len} of {canonical} slots filled"),
            ));
        }
    }

    for (i, background) in character.backgrounds.iter().enumerate() {
        if background.wises.len() < WISE_SLOTS {
            issues.push(ValidationIssue::warning(
                format!("backgrounds[{i}].wises"),
                format!("{} of {WISE_SLOTS} slots filled", background.wises.len()),
            ));
        }
    }
}

fn validate_trackers(character: &Character, issues: &mut Vec<ValidationIssue>) {
    for (field, tracker) in [("spark", &character.spark), ("story", &character.story)] {
        if tracker.steps.len() != TRACKER_STEPS {
            issues.push(ValidationIssue::warning(
                format!("{field}.steps"),
                format!(
                    "expected {TRACKER_STEPS} steps, found {}",
                    tracker.steps.len()
                ),
            ));
        }
    }
}

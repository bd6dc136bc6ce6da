//! Core types for the Grimwild character engine.
//!
//! This crate defines the canonical character state that a host platform
//! persists, plus the configuration collaborators the engine reads from:
//! the ordered stat catalog and a localization resolver. It contains no
//! derivation or roll logic; see `gw-mechanics` for that.

/// The canonical character aggregate and its narrative parts.
pub mod character;
/// Ordered stat catalog and built-in presets.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Localization of catalog label keys.
pub mod i18n;
/// Countable dice pools and status conditions.
pub mod pool;

/// Re-export character types.
pub use character::{Background, Bond, Character, Stat, StepTracker, TraitEntry};
/// Re-export catalog types.
pub use catalog::{StatCatalog, StatDescriptor, StatDomain};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export localization types.
pub use i18n::{JsonLocalizer, Localizer, NoLocalizer};
/// Re-export pool types.
pub use pool::{Condition, Severity, StatusPool};

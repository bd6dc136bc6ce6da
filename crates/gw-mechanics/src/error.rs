//! Error types for the mechanics engine.

/// Reasons a roll produced no formula.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// The requested stat is not on the character; nothing was prompted.
    #[error("invalid stat: \"{0}\"")]
    InvalidStat(String),

    /// The user abandoned the roll interaction.
    #[error("roll cancelled")]
    Cancelled,
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

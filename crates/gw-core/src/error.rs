/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or querying character state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A JSON document could not be parsed into the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

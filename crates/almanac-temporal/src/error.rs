use thiserror::Error;

/// Errors raised while building or querying temporal values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error(transparent)]
    Core(#[from] almanac_core::CoreError),
}

pub type TemporalResult<T> = std::result::Result<T, TemporalError>;

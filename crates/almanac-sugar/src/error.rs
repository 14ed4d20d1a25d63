use almanac_temporal::TemporalError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SugarError {
    #[error("Unknown shorthand: {0}")]
    UnknownShorthand(String),

    #[error("Expression builder has no expressions")]
    EmptyBuilder,

    #[error(transparent)]
    Temporal(#[from] TemporalError),
}

pub type SugarResult<T> = std::result::Result<T, SugarError>;

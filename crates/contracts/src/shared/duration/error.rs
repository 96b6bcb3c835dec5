use thiserror::Error;

/// Ошибки преобразования составного значения в `chrono::TimeDelta`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DurationError {
    #[error("duration is empty")]
    EmptyDuration,

    #[error("invalid duration magnitude: {0:?}")]
    InvalidMagnitude(String),

    #[error("unknown duration unit: {0:?}")]
    UnknownUnit(String),

    #[error("duration unit is not set")]
    MissingUnit,

    #[error("duration {0} is out of range")]
    OutOfRange(String),
}

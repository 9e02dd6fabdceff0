use thiserror::Error;

/// Rejected user input. Raised before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be blank")]
    EmptyName,

    #[error("day count must not be negative: {0}")]
    NegativeDays(i64),

    #[error("quantity must be at least 1: {0}")]
    InvalidQuantity(i32),

    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    #[error("cannot parse time of day: {0:?} (expected HH:MM)")]
    UnparsableTimeOfDay(String),

    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("unknown option: {0}")]
    UnknownOption(String),
}

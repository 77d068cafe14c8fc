// ⚠️ Engine Errors
// Validation failures are fatal to a call; rule failures are isolated per rule

use thiserror::Error;

/// Errors produced by the pattern engine.
///
/// The `Display` strings of the validation variants are part of the wire
/// contract: route layers forward them verbatim in 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Invalid year: must be between 1900 and 2100")]
    InvalidYear(i32),

    #[error("Invalid month: must be between 1 and 12")]
    InvalidMonth(i32),

    #[error("Invalid day: must be between 1 and 31")]
    InvalidDay(i32),

    #[error("Invalid day: {day} exceeds days in month {month} ({days_in_month} days)")]
    DayExceedsMonth {
        day: i32,
        month: i32,
        days_in_month: i32,
    },

    #[error("Invalid hour: must be between 0 and 23")]
    InvalidHour(i32),

    #[error("Invalid minute: must be between 0 and 59")]
    InvalidMinute(i32),

    #[error("Invalid birth date '{0}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM")]
    Unparseable(String),

    /// A single rule failed while being evaluated. Never returned to callers
    /// of detection; only logged.
    #[error("Rule '{rule}' failed to evaluate: {message}")]
    RuleEvaluation { rule: String, message: String },
}

impl PatternError {
    /// True for the birth-date validation variants
    pub fn is_validation(&self) -> bool {
        !matches!(self, PatternError::RuleEvaluation { .. })
    }
}

pub type PatternResult<T> = Result<T, PatternError>;

// ============================================================================
// TESTS
// ============================================================================

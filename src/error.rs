//! Error types for convention tags and weekend specifiers.
//!
//! These are the only failures in the crate. Everything else (out-of-range
//! months and days, negative serials, huge years) is accepted and resolved
//! arithmetically: the engine is a calculator, not a calendar validator.

use thiserror::Error;

/// Errors that can occur when resolving a numeric convention tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConventionError {
    #[error("unknown weekday convention tag {tag}")]
    UnknownWeekdayTag { tag: i64 },

    #[error("unknown week convention tag {tag}")]
    UnknownWeekTag { tag: i64 },

    #[error("unknown weekend convention tag {tag}")]
    UnknownWeekendTag { tag: i64 },
}

/// Errors that can occur when parsing a seven-character weekend bitstring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekendSpecError {
    #[error("weekend specifier must be 7 characters, got {length}")]
    WrongLength { length: usize },

    #[error("invalid character '{found}' at position {position} in weekend specifier")]
    InvalidCharacter { position: usize, found: char },
}

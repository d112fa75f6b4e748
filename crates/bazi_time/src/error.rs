//! Error types for civil time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil time construction, parsing, or range checks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar or clock field is outside its valid range.
    InvalidCivilTime(&'static str),
    /// The year lies outside the supported proleptic Gregorian range.
    OutOfSupportedRange { year: i32 },
    /// A timestamp string could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCivilTime(msg) => write!(f, "invalid civil time: {msg}"),
            Self::OutOfSupportedRange { year } => {
                write!(f, "year {year} is outside the supported range")
            }
            Self::Parse(msg) => write!(f, "timestamp parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

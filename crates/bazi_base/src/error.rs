//! Error types for table lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from stem/branch/element/term lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BaziError {
    /// Ordinal outside `0..len` for the named table.
    InvalidIndex {
        kind: &'static str,
        index: usize,
        len: usize,
    },
    /// Stem and branch of different polarity never pair in the 60-cycle.
    MismatchedParity { stem: u8, branch: u8 },
    /// Glyph or name not found in any table.
    UnknownName(String),
    /// Analyzer configuration failed validation.
    InvalidConfig(&'static str),
}

impl BaziError {
    pub(crate) fn check_index(kind: &'static str, index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::InvalidIndex { kind, index, len })
        }
    }
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { kind, index, len } => {
                write!(f, "invalid {kind} index {index} (expected 0..{len})")
            }
            Self::MismatchedParity { stem, branch } => write!(
                f,
                "stem {stem} and branch {branch} differ in polarity and never pair"
            ),
            Self::UnknownName(name) => write!(f, "unknown name: {name}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for BaziError {}

//! Error types for solar-term search and pillar assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_base::BaziError;
use bazi_time::TimeError;

/// Errors from term solving and pillar assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Table lookup failed.
    Base(BaziError),
    /// Timestamp invalid or outside the supported range.
    Time(TimeError),
    /// Newton refinement hit its iteration cap above tolerance.
    ConvergenceFailure {
        year: i32,
        term_index: u8,
        residual_deg: f64,
        iterations: u32,
    },
    /// Solver configuration failed validation.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "table lookup: {e}"),
            Self::Time(e) => write!(f, "time: {e}"),
            Self::ConvergenceFailure {
                year,
                term_index,
                residual_deg,
                iterations,
            } => write!(
                f,
                "solar term {term_index} of {year} did not converge after {iterations} \
                 iterations (residual {residual_deg:.6} deg)"
            ),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BaziError> for SearchError {
    fn from(e: BaziError) -> Self {
        Self::Base(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

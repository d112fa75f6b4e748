//! Types for solar-term solving.

use bazi_base::SolarTerm;
use bazi_time::CivilTime;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Newton solver settings for term instants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JieqiConfig {
    /// Longitude evaluations allowed before giving up.
    pub max_iterations: u32,
    /// Accept an estimate once |longitude - target| falls below this.
    pub tolerance_deg: f64,
    /// Mean solar motion used to turn a longitude error into a day correction.
    pub daily_rate_deg: f64,
    /// Days subtracted from the linear seed `Jan 1 + index * 365.25 / 24`.
    pub seed_bias_days: f64,
    /// Keep solved term years in the engine's cache.
    pub use_cache: bool,
}

impl Default for JieqiConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tolerance_deg: 1e-4,
            daily_rate_deg: 0.9856,
            seed_bias_days: 10.0,
            use_cache: true,
        }
    }
}

impl JieqiConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig(
                "max_iterations must be greater than zero",
            ));
        }
        if !(self.tolerance_deg.is_finite() && self.tolerance_deg > 0.0) {
            return Err(SearchError::InvalidConfig(
                "tolerance_deg must be finite and positive",
            ));
        }
        if !(self.daily_rate_deg.is_finite() && self.daily_rate_deg > 0.0) {
            return Err(SearchError::InvalidConfig(
                "daily_rate_deg must be finite and positive",
            ));
        }
        if !self.seed_bias_days.is_finite() {
            return Err(SearchError::InvalidConfig("seed_bias_days must be finite"));
        }
        Ok(())
    }
}

/// The instant one solar term begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JieqiEvent {
    pub term: SolarTerm,
    /// Term year the event belongs to. 小寒 and 大寒 of term year Y fall in
    /// January of Y + 1.
    pub term_year: i32,
    /// Converged Julian Date.
    pub jd: f64,
    /// `jd` truncated to the second.
    pub time: CivilTime,
}

/// The term in effect at some instant, with its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentJieqi {
    pub term: SolarTerm,
    /// Start of `term`, at or before the queried instant.
    pub start: JieqiEvent,
    /// Start of the following term, after the queried instant.
    pub next: JieqiEvent,
}

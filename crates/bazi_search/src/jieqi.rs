//! Solar-term instants and the term in effect at a timestamp.
//!
//! Term `i` of term year Y is seeded at `Jan 1 of Y + i * 365.25 / 24 - bias`
//! days and refined by Newton steps against the apparent solar longitude,
//! using a fixed mean daily motion in place of the derivative. Seeding from
//! January 1 places 小寒 and 大寒 of term year Y in January of Y + 1, so a
//! term year runs from 立春 of Y up to 立春 of Y + 1 and its 24 instants are
//! strictly increasing.

use std::sync::Arc;

use bazi_base::{ALL_SOLAR_TERMS, SolarTerm, normalize_pm180};
use bazi_time::{CivilTime, TimeError, calendar_to_jd, check_supported_year};

use crate::engine::{JieqiEngine, YearTerms};
use crate::error::SearchError;
use crate::jieqi_types::{CurrentJieqi, JieqiConfig, JieqiEvent};
use crate::solar_longitude::apparent_solar_longitude_deg;

/// Earliest solvable term year (covers January of year 1).
pub const MIN_TERM_YEAR: i32 = 0;

/// Latest solvable term year (covers the year after 9999).
pub const MAX_TERM_YEAR: i32 = 10_000;

/// Days per term step of the linear seed.
const SEED_STEP_DAYS: f64 = 365.25 / 24.0;

fn check_term_year(term_year: i32) -> Result<(), SearchError> {
    if (MIN_TERM_YEAR..=MAX_TERM_YEAR).contains(&term_year) {
        Ok(())
    } else {
        Err(TimeError::OutOfSupportedRange { year: term_year }.into())
    }
}

/// Solve the instant `term` begins in `term_year`.
///
/// Fails with [`SearchError::ConvergenceFailure`] when `max_iterations`
/// longitude evaluations pass without the residual dropping below
/// `tolerance_deg`. No partial estimate is returned in that case.
pub fn compute_term_instant(
    term_year: i32,
    term: SolarTerm,
    config: &JieqiConfig,
) -> Result<JieqiEvent, SearchError> {
    check_term_year(term_year)?;
    let target = term.longitude_deg();
    let mut jd = calendar_to_jd(term_year, 1, 1, 0) + f64::from(term.index()) * SEED_STEP_DAYS
        - config.seed_bias_days;

    let mut residual = f64::NAN;
    for iteration in 1..=config.max_iterations {
        residual = normalize_pm180(apparent_solar_longitude_deg(jd) - target);
        if residual.abs() < config.tolerance_deg {
            tracing::debug!(
                term_year,
                term_index = term.index(),
                iterations = iteration,
                residual_deg = residual,
                "solved solar term"
            );
            return Ok(JieqiEvent {
                term,
                term_year,
                jd,
                time: CivilTime::from_jd(jd),
            });
        }
        jd -= residual / config.daily_rate_deg;
    }

    tracing::warn!(
        term_year,
        term_index = term.index(),
        iterations = config.max_iterations,
        residual_deg = residual,
        "solar term did not converge"
    );
    Err(SearchError::ConvergenceFailure {
        year: term_year,
        term_index: term.index(),
        residual_deg: residual,
        iterations: config.max_iterations,
    })
}

/// Solve all 24 terms of `term_year`, without touching any cache.
pub fn compute_year_terms(term_year: i32, config: &JieqiConfig) -> Result<YearTerms, SearchError> {
    let first = compute_term_instant(term_year, SolarTerm::LiChun, config)?;
    let mut terms = [first; 24];
    for (slot, term) in terms.iter_mut().zip(ALL_SOLAR_TERMS).skip(1) {
        *slot = compute_term_instant(term_year, term, config)?;
    }
    Ok(terms)
}

/// Instant term `index` (0 = 立春 .. 23 = 大寒) begins in `term_year`.
pub fn term_instant(
    engine: &JieqiEngine,
    term_year: i32,
    index: usize,
) -> Result<JieqiEvent, SearchError> {
    let term = SolarTerm::from_index(index)?;
    if let Some(terms) = engine.cached_year(term_year) {
        return Ok(terms[index]);
    }
    compute_term_instant(term_year, term, engine.config())
}

/// All 24 term instants of `term_year`, in order.
pub fn year_terms(engine: &JieqiEngine, term_year: i32) -> Result<Arc<YearTerms>, SearchError> {
    engine.year_terms(term_year)
}

/// Index of the latest event at or before `time`.
fn latest_at_or_before(events: &[JieqiEvent], time: &CivilTime) -> Option<usize> {
    events.iter().rposition(|e| e.time <= *time)
}

/// The solar term in effect at `time`, with its start and the next term's start.
///
/// Before 立春 of its own calendar year a timestamp belongs to the previous
/// term year, whose 小寒/大寒 fall in January. Early January before 小寒 is
/// still 冬至 of the previous term year.
pub fn current_jieqi(engine: &JieqiEngine, time: &CivilTime) -> Result<CurrentJieqi, SearchError> {
    check_supported_year(time.year)?;
    let this_year = engine.year_terms(time.year)?;

    if *time < this_year[0].time {
        let prev = engine.year_terms(time.year - 1)?;
        // prev[0] is 立春 of the previous calendar year, before any January instant
        let i = latest_at_or_before(&prev[..], time).unwrap_or(0);
        let next = if i + 1 < prev.len() {
            prev[i + 1]
        } else {
            this_year[0]
        };
        return Ok(CurrentJieqi {
            term: prev[i].term,
            start: prev[i],
            next,
        });
    }

    let i = latest_at_or_before(&this_year[..], time).unwrap_or(0);
    let next = if i + 1 < this_year.len() {
        this_year[i + 1]
    } else {
        engine.year_terms(time.year + 1)?[0]
    };
    Ok(CurrentJieqi {
        term: this_year[i].term,
        start: this_year[i],
        next,
    })
}

/// Whether `time` precedes 立春 of its own calendar year.
pub fn is_before_lichun(engine: &JieqiEngine, time: &CivilTime) -> Result<bool, SearchError> {
    check_supported_year(time.year)?;
    let lichun = term_instant(engine, time.year, SolarTerm::LiChun.index() as usize)?;
    Ok(*time < lichun.time)
}

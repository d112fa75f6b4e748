//! Four-pillar assembly from a civil timestamp.

use bazi_base::{Branch, FourPillars, GanZhi, Pillar, ganzhi_from_year, hour_stem, month_stem};
use bazi_time::{CivilTime, check_supported_year};

use crate::engine::JieqiEngine;
use crate::error::SearchError;
use crate::jieqi::{current_jieqi, is_before_lichun};
use crate::jieqi_types::CurrentJieqi;

/// Julian Day Number of 1949-10-01, a 甲子 day.
pub const DAY_PILLAR_EPOCH_JDN: i64 = 2_433_191;

/// Sexagenary year of `time`: the calendar year, less one before 立春.
pub fn sexagenary_year(engine: &JieqiEngine, time: &CivilTime) -> Result<i32, SearchError> {
    if is_before_lichun(engine, time)? {
        Ok(time.year - 1)
    } else {
        Ok(time.year)
    }
}

pub fn year_pillar(engine: &JieqiEngine, time: &CivilTime) -> Result<Pillar, SearchError> {
    let (ganzhi, _) = ganzhi_from_year(sexagenary_year(engine, time)?);
    Ok(Pillar::from(ganzhi))
}

/// Month pillar from the active term and the (立春-adjusted) year pillar.
pub fn month_pillar(
    engine: &JieqiEngine,
    time: &CivilTime,
    year: &Pillar,
) -> Result<Pillar, SearchError> {
    let current = current_jieqi(engine, time)?;
    month_pillar_for_term(&current, year)
}

fn month_pillar_for_term(current: &CurrentJieqi, year: &Pillar) -> Result<Pillar, SearchError> {
    let branch = current.term.month_branch();
    Ok(Pillar::new(month_stem(year.stem(), branch), branch)?)
}

/// Day pillar by day count from the 1949-10-01 甲子 epoch.
///
/// Depends only on the calendar date, never on solar-term timing.
pub fn day_pillar(time: &CivilTime) -> Result<Pillar, SearchError> {
    check_supported_year(time.year)?;
    let offset = time.day_number() - DAY_PILLAR_EPOCH_JDN;
    Ok(Pillar::from(GanZhi::from_offset(offset)))
}

/// Hour pillar. 23:00-23:59 is the 子 hour of the same civil day.
pub fn hour_pillar(time: &CivilTime, day: &Pillar) -> Result<Pillar, SearchError> {
    let branch = Branch::from_hour(time.hour)?;
    Ok(Pillar::new(hour_stem(day.stem(), branch), branch)?)
}

/// Pillars plus the term record they were derived from.
pub(crate) fn assemble(
    engine: &JieqiEngine,
    time: &CivilTime,
) -> Result<(FourPillars, CurrentJieqi), SearchError> {
    check_supported_year(time.year)?;
    let current = current_jieqi(engine, time)?;
    let year = year_pillar(engine, time)?;
    let month = month_pillar_for_term(&current, &year)?;
    let day = day_pillar(time)?;
    let hour = hour_pillar(time, &day)?;
    let pillars = FourPillars {
        year,
        month,
        day,
        hour,
        birth: *time,
        solar_term: current.term,
    };
    Ok((pillars, current))
}

/// Year, month, day and hour pillars for `time`.
pub fn four_pillars_for_date(
    engine: &JieqiEngine,
    time: &CivilTime,
) -> Result<FourPillars, SearchError> {
    assemble(engine, time).map(|(pillars, _)| pillars)
}

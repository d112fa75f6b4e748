//! Full chart: pillars, active term and element balance in one call.

use bazi_base::{BalanceConfig, BalanceReport, FourPillars, analyze_balance};
use bazi_time::CivilTime;
use serde::Serialize;

use crate::engine::JieqiEngine;
use crate::error::SearchError;
use crate::jieqi_types::CurrentJieqi;
use crate::pillars::assemble;

/// Everything derived from one birth timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaziChart {
    pub pillars: FourPillars,
    /// Term in effect at the birth instant, with its bounds.
    pub current_term: CurrentJieqi,
    pub balance: BalanceReport,
}

/// Run the whole pipeline for `time`.
pub fn bazi_chart_for_date(
    engine: &JieqiEngine,
    time: &CivilTime,
    balance_config: &BalanceConfig,
) -> Result<BaziChart, SearchError> {
    balance_config.validate()?;
    let (pillars, current_term) = assemble(engine, time)?;
    let balance = analyze_balance(&pillars, balance_config);
    tracing::debug!(
        birth = %time,
        pillars = %pillars,
        strength = balance.score.strength.as_str(),
        useful = balance.yongshen.useful.name(),
        "assembled chart"
    );
    Ok(BaziChart {
        pillars,
        current_term,
        balance,
    })
}

//! Solar-term search and four-pillar assembly.
//!
//! This crate provides:
//! - Apparent solar longitude from a truncated low-order series
//! - Newton refinement of the 24 solar-term instants of any term year
//! - A shareable engine caching solved term years
//! - The current term for a timestamp, with its bounds
//! - Year, month, day and hour pillars, and the full chart pipeline

pub mod chart;
pub mod engine;
pub mod error;
pub mod jieqi;
pub mod jieqi_types;
pub mod pillars;
pub mod solar_longitude;

pub use chart::{BaziChart, bazi_chart_for_date};
pub use engine::{JieqiCacheStats, JieqiEngine, YearTerms};
pub use error::SearchError;
pub use jieqi::{
    MAX_TERM_YEAR, MIN_TERM_YEAR, compute_term_instant, compute_year_terms, current_jieqi,
    is_before_lichun, term_instant, year_terms,
};
pub use jieqi_types::{CurrentJieqi, JieqiConfig, JieqiEvent};
pub use pillars::{
    DAY_PILLAR_EPOCH_JDN, day_pillar, four_pillars_for_date, hour_pillar, month_pillar,
    sexagenary_year, year_pillar,
};
pub use solar_longitude::apparent_solar_longitude_deg;

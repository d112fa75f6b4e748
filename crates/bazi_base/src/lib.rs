//! Static stem/branch tables and five-element balance analysis.
//!
//! This crate provides:
//! - The 10 Heavenly Stems, 12 Earthly Branches and their elements
//! - Production and domination cycles of the five elements
//! - The 60-term sexagenary cycle with combine/decompose lookups
//! - Five-tiger (month stem) and five-rat (hour stem) rotation tables
//! - The 24 solar terms and their month branches
//! - Pillar types and the four-pillar set
//! - Element tally, day-master strength scoring and yongshen selection
//!
//! Everything here is immutable data and pure functions; nothing depends on
//! solar-term timing.

pub mod balance;
pub mod balance_types;
pub mod branch;
pub mod element;
pub mod error;
pub mod pillar;
pub mod rotation;
pub mod sexagenary;
pub mod solar_term;
pub mod stem;
pub mod util;

pub use balance::{
    analyze_balance, classify_strength, count_elements, determine_yongshen, score_strength,
};
pub use balance_types::{
    BalanceConfig, BalanceReport, ElementTally, SlotWeights, Strength, StrengthScore,
    StrengthThresholds, YongShen,
};
pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, ALL_RELATIONS, Element, Relation, is_ke, is_sheng};
pub use error::BaziError;
pub use pillar::{ALL_PILLAR_SLOTS, FourPillars, Pillar, PillarSlot};
pub use rotation::{
    FIVE_RAT, FIVE_TIGER, MONTH_BRANCHES, hour_stem, month_branch, month_position, month_stem,
};
pub use sexagenary::{
    GanZhi, SEXAGENARY_CYCLE, SEXAGENARY_EPOCH_YEAR, combine, combine_indices, decompose,
    ganzhi_from_year,
};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
pub use stem::{ALL_STEMS, Stem};
pub use util::{normalize_360, normalize_pm180};

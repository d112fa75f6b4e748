//! The 24 solar terms (jieqi).
//!
//! Term `i` begins when the Sun's apparent ecliptic longitude reaches
//! `(315 + 15 i) mod 360` degrees, starting from 立春 at 315°. Even-indexed
//! terms (节) open a solar month; odd-indexed terms (中气) fall mid-month.

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::error::BaziError;
use crate::rotation::month_branch;

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All 24 terms in term-year order (index 0 = 立春).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

const SOLAR_TERM_ENGLISH: [&str; 24] = [
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Spring Equinox",
    "Pure Brightness",
    "Grain Rain",
    "Start of Summer",
    "Grain Buds",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
    "Minor Cold",
    "Major Cold",
];

/// Longitude of 立春 in degrees.
pub const LICHUN_LONGITUDE_DEG: f64 = 315.0;

/// Longitude step between consecutive terms in degrees.
pub const TERM_SPACING_DEG: f64 = 15.0;

impl SolarTerm {
    /// 0-based index (立春=0 .. 大寒=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Range-checked lookup by ordinal.
    pub fn from_index(index: usize) -> Result<Self, BaziError> {
        BaziError::check_index("solar term", index, ALL_SOLAR_TERMS.len())?;
        Ok(ALL_SOLAR_TERMS[index])
    }

    /// Chinese name, e.g. "立春".
    pub const fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    pub const fn english_name(self) -> &'static str {
        SOLAR_TERM_ENGLISH[self.index() as usize]
    }

    /// Lookup by Chinese name.
    pub fn from_name(name: &str) -> Result<Self, BaziError> {
        SOLAR_TERM_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| ALL_SOLAR_TERMS[i])
            .ok_or_else(|| BaziError::UnknownName(name.to_string()))
    }

    /// Apparent solar longitude at which the term begins, in [0, 360).
    pub fn longitude_deg(self) -> f64 {
        (LICHUN_LONGITUDE_DEG + TERM_SPACING_DEG * self.index() as f64).rem_euclid(360.0)
    }

    /// Whether the term opens a solar month (节).
    pub const fn is_month_start(self) -> bool {
        self.index() % 2 == 0
    }

    /// Month position (0 = 寅 month .. 11 = 丑 month) the term falls in.
    pub const fn month_position(self) -> u8 {
        self.index() / 2
    }

    /// Branch of the solar month the term falls in.
    pub const fn month_branch(self) -> Branch {
        month_branch(self.month_position())
    }

    /// The following term, wrapping 大寒 → 立春.
    pub const fn next(self) -> SolarTerm {
        ALL_SOLAR_TERMS[((self.index() + 1) % 24) as usize]
    }
}

impl Serialize for SolarTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

//! The ten Heavenly Stems (tiangan).
//!
//! Stems alternate yang/yin and pair up by element: 甲乙 wood, 丙丁 fire,
//! 戊己 earth, 庚辛 metal, 壬癸 water.

use serde::{Serialize, Serializer};

use crate::element::Element;
use crate::error::BaziError;

/// One of the 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_GLYPHS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based ordinal (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Range-checked lookup by ordinal.
    pub fn from_index(index: usize) -> Result<Self, BaziError> {
        BaziError::check_index("stem", index, ALL_STEMS.len())?;
        Ok(ALL_STEMS[index])
    }

    pub const fn glyph(self) -> &'static str {
        STEM_GLYPHS[self.index() as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index() as usize]
    }

    /// Reverse lookup from a single glyph.
    pub fn from_glyph(glyph: &str) -> Result<Self, BaziError> {
        STEM_GLYPHS
            .iter()
            .position(|g| *g == glyph)
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| BaziError::UnknownName(glyph.to_string()))
    }

    /// Element of the stem; consecutive pairs share one.
    pub const fn element(self) -> Element {
        crate::element::ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    /// Even ordinals are yang.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Stem `n` steps further along the cycle (wraps; `n` may be negative).
    pub const fn offset(self, n: i32) -> Stem {
        ALL_STEMS[(self.index() as i32 + n).rem_euclid(10) as usize]
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

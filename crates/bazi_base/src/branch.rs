//! The twelve Earthly Branches (dizhi).
//!
//! Each branch governs a two-hour window of the civil day. 子 straddles
//! midnight (23:00-00:59), so the window for hour `h` is `((h + 1) / 2) % 12`.

use serde::{Serialize, Serializer};

use crate::element::Element;
use crate::error::BaziError;

/// One of the 12 Earthly Branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_GLYPHS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Principal element of each branch.
const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// 0-based ordinal (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Range-checked lookup by ordinal.
    pub fn from_index(index: usize) -> Result<Self, BaziError> {
        BaziError::check_index("branch", index, ALL_BRANCHES.len())?;
        Ok(ALL_BRANCHES[index])
    }

    pub const fn glyph(self) -> &'static str {
        BRANCH_GLYPHS[self.index() as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index() as usize]
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }

    pub fn from_glyph(glyph: &str) -> Result<Self, BaziError> {
        BRANCH_GLYPHS
            .iter()
            .position(|g| *g == glyph)
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| BaziError::UnknownName(glyph.to_string()))
    }

    pub const fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }

    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Branch governing civil hour `hour` (0..=23).
    pub fn from_hour(hour: u32) -> Result<Self, BaziError> {
        BaziError::check_index("hour", hour as usize, 24)?;
        Ok(ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize])
    }

    /// First and last civil hour of the branch's window.
    ///
    /// 子 returns `(23, 0)`; every other branch spans two hours within one day.
    pub const fn hour_window(self) -> (u32, u32) {
        let i = self.index() as u32;
        ((2 * i + 23) % 24, 2 * i)
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i).unwrap(), *b);
        }
        assert!(Branch::from_index(12).is_err());
    }

    #[test]
    fn hour_buckets() {
        assert_eq!(Branch::from_hour(23).unwrap(), Branch::Zi);
        assert_eq!(Branch::from_hour(0).unwrap(), Branch::Zi);
        assert_eq!(Branch::from_hour(1).unwrap(), Branch::Chou);
        assert_eq!(Branch::from_hour(2).unwrap(), Branch::Chou);
        assert_eq!(Branch::from_hour(8).unwrap(), Branch::Chen);
        assert_eq!(Branch::from_hour(11).unwrap(), Branch::Wu);
        assert_eq!(Branch::from_hour(19).unwrap(), Branch::Xu);
        assert_eq!(Branch::from_hour(20).unwrap(), Branch::Xu);
        assert_eq!(Branch::from_hour(21).unwrap(), Branch::Hai);
        assert_eq!(Branch::from_hour(22).unwrap(), Branch::Hai);
    }

    #[test]
    fn hour_out_of_range() {
        assert!(matches!(
            Branch::from_hour(24),
            Err(BaziError::InvalidIndex { kind: "hour", .. })
        ));
    }

    #[test]
    fn hour_window_covers_day() {
        assert_eq!(Branch::Zi.hour_window(), (23, 0));
        assert_eq!(Branch::Chou.hour_window(), (1, 2));
        assert_eq!(Branch::Hai.hour_window(), (21, 22));
        for b in ALL_BRANCHES {
            let (start, end) = b.hour_window();
            assert_eq!(Branch::from_hour(start).unwrap(), b);
            assert_eq!(Branch::from_hour(end).unwrap(), b);
        }
    }

    #[test]
    fn principal_elements() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Yin.element(), Element::Wood);
        assert_eq!(Branch::Wu.element(), Element::Fire);
        assert_eq!(Branch::Shen.element(), Element::Metal);
        let earth = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .count();
        assert_eq!(earth, 4);
    }

    #[test]
    fn animals() {
        assert_eq!(Branch::Zi.animal(), "Rat");
        assert_eq!(Branch::Xu.animal(), "Dog");
    }
}

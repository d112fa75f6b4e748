//! The five elements (wuxing) and their production/domination cycles.
//!
//! Production (sheng): wood → fire → earth → metal → water → wood.
//! Domination (ke):    wood → earth → water → fire → metal → wood.
//!
//! Both cycles and their inverses are fixed 5-entry permutations stored as
//! lookup tables indexed by element ordinal.

use serde::{Deserialize, Serialize};

use crate::error::BaziError;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in production order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

const ELEMENT_GLYPHS: [&str; 5] = ["木", "火", "土", "金", "水"];
const ELEMENT_NAMES: [&str; 5] = ["wood", "fire", "earth", "metal", "water"];

/// `GENERATES[e]` is the element that `e` produces.
const GENERATES: [Element; 5] = [
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
];

/// `CONTROLS[e]` is the element that `e` dominates.
const CONTROLS: [Element; 5] = [
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
    Element::Fire,
];

/// `GENERATED_BY[e]` is the element that produces `e`.
const GENERATED_BY: [Element; 5] = [
    Element::Water,
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
];

/// `CONTROLLED_BY[e]` is the element that dominates `e`.
const CONTROLLED_BY: [Element; 5] = [
    Element::Metal,
    Element::Water,
    Element::Wood,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// 0-based ordinal (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Range-checked lookup by ordinal.
    pub fn from_index(index: usize) -> Result<Self, BaziError> {
        BaziError::check_index("element", index, ALL_ELEMENTS.len())?;
        Ok(ALL_ELEMENTS[index])
    }

    /// Chinese glyph (木火土金水).
    pub const fn glyph(self) -> &'static str {
        ELEMENT_GLYPHS[self.index() as usize]
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        ELEMENT_NAMES[self.index() as usize]
    }

    /// Reverse lookup from a glyph.
    pub fn from_glyph(glyph: &str) -> Result<Self, BaziError> {
        ELEMENT_GLYPHS
            .iter()
            .position(|g| *g == glyph)
            .map(|i| ALL_ELEMENTS[i])
            .ok_or_else(|| BaziError::UnknownName(glyph.to_string()))
    }

    /// The element this one produces.
    pub const fn generates(self) -> Element {
        GENERATES[self.index() as usize]
    }

    /// The element this one dominates.
    pub const fn controls(self) -> Element {
        CONTROLS[self.index() as usize]
    }

    /// The element that produces this one.
    pub const fn generated_by(self) -> Element {
        GENERATED_BY[self.index() as usize]
    }

    /// The element that dominates this one.
    pub const fn controlled_by(self) -> Element {
        CONTROLLED_BY[self.index() as usize]
    }

    /// How `self` stands relative to a day-master element.
    pub const fn relation_to(self, day_master: Element) -> Relation {
        let offset = (self.index() + 5 - day_master.index()) % 5;
        RELATION_BY_OFFSET[offset as usize]
    }
}

/// Whether `a` produces `b`.
pub fn is_sheng(a: Element, b: Element) -> bool {
    a.generates() == b
}

/// Whether `a` dominates `b`.
pub fn is_ke(a: Element, b: Element) -> bool {
    a.controls() == b
}

/// The five ways an element relates to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Same element (比劫).
    Companion,
    /// Produces the day master (印).
    Resource,
    /// Dominates the day master (官杀).
    Officer,
    /// Produced by the day master (食伤).
    Output,
    /// Dominated by the day master (财).
    Wealth,
}

/// All five relations, supportive ones first.
pub const ALL_RELATIONS: [Relation; 5] = [
    Relation::Companion,
    Relation::Resource,
    Relation::Officer,
    Relation::Output,
    Relation::Wealth,
];

/// Relation indexed by `(element - day_master) mod 5` along the production cycle.
const RELATION_BY_OFFSET: [Relation; 5] = [
    Relation::Companion,
    Relation::Output,
    Relation::Wealth,
    Relation::Officer,
    Relation::Resource,
];

impl Relation {
    /// Traditional two-character label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Companion => "比劫",
            Self::Resource => "印",
            Self::Officer => "官杀",
            Self::Output => "食伤",
            Self::Wealth => "财",
        }
    }

    /// Whether this relation strengthens the day master.
    pub const fn is_supportive(self) -> bool {
        matches!(self, Self::Companion | Self::Resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supportive_relations_feed_day_master() {
        let dm = Element::Wood;
        for e in ALL_ELEMENTS {
            let rel = e.relation_to(dm);
            let feeds = e == dm || e.generates() == dm;
            assert_eq!(rel.is_supportive(), feeds, "{e:?}");
        }
        assert_eq!(ALL_RELATIONS.iter().filter(|r| r.is_supportive()).count(), 2);
    }

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(Element::from_index(i).unwrap(), *e);
        }
    }

    #[test]
    fn from_index_range_checked() {
        assert_eq!(
            Element::from_index(5),
            Err(BaziError::InvalidIndex {
                kind: "element",
                index: 5,
                len: 5
            })
        );
    }

    #[test]
    fn production_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Fire.generates(), Element::Earth);
        assert_eq!(Element::Earth.generates(), Element::Metal);
        assert_eq!(Element::Metal.generates(), Element::Water);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn domination_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
    }

    #[test]
    fn inverses_agree() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
            assert_eq!(e.generated_by().generates(), e);
            assert_eq!(e.controlled_by().controls(), e);
        }
    }

    #[test]
    fn cycles_are_permutations() {
        let mut seen_sheng = [false; 5];
        let mut seen_ke = [false; 5];
        for e in ALL_ELEMENTS {
            seen_sheng[e.generates().index() as usize] = true;
            seen_ke[e.controls().index() as usize] = true;
            assert_ne!(e.generates(), e);
            assert_ne!(e.controls(), e);
        }
        assert!(seen_sheng.iter().all(|&s| s));
        assert!(seen_ke.iter().all(|&s| s));
    }

    #[test]
    fn relation_table_matches_cycles() {
        for dm in ALL_ELEMENTS {
            for e in ALL_ELEMENTS {
                let expected = if e == dm {
                    Relation::Companion
                } else if is_sheng(e, dm) {
                    Relation::Resource
                } else if is_ke(e, dm) {
                    Relation::Officer
                } else if is_sheng(dm, e) {
                    Relation::Output
                } else {
                    assert!(is_ke(dm, e));
                    Relation::Wealth
                };
                assert_eq!(e.relation_to(dm), expected, "{e:?} vs {dm:?}");
            }
        }
    }

    #[test]
    fn glyph_roundtrip() {
        for e in ALL_ELEMENTS {
            assert_eq!(Element::from_glyph(e.glyph()).unwrap(), e);
        }
        assert!(matches!(
            Element::from_glyph("风"),
            Err(BaziError::UnknownName(_))
        ));
    }
}

//! Pillars and the four-pillar set.

use std::fmt::{Display, Formatter};

use bazi_time::CivilTime;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::element::Element;
use crate::error::BaziError;
use crate::sexagenary::GanZhi;
use crate::solar_term::SolarTerm;
use crate::stem::Stem;

/// One stem over one branch, always a valid 60-cycle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    ganzhi: GanZhi,
}

impl Pillar {
    /// Build a pillar, rejecting stem/branch pairs of mismatched polarity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaziError> {
        GanZhi::new(stem, branch).map(Self::from)
    }

    pub const fn stem(&self) -> Stem {
        self.ganzhi.stem
    }

    pub const fn branch(&self) -> Branch {
        self.ganzhi.branch
    }

    pub const fn stem_element(&self) -> Element {
        self.ganzhi.stem.element()
    }

    pub const fn branch_element(&self) -> Element {
        self.ganzhi.branch.element()
    }

    /// Position in the 60-cycle.
    pub const fn cycle_index(&self) -> u8 {
        self.ganzhi.index()
    }

    pub const fn ganzhi(&self) -> GanZhi {
        self.ganzhi
    }

    /// Two-glyph form such as "甲子".
    pub fn full(&self) -> String {
        self.ganzhi.glyphs()
    }
}

impl From<GanZhi> for Pillar {
    fn from(ganzhi: GanZhi) -> Self {
        Self { ganzhi }
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.ganzhi, f)
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Pillar", 5)?;
        s.serialize_field("stem", &self.stem())?;
        s.serialize_field("branch", &self.branch())?;
        s.serialize_field("stem_element", &self.stem_element())?;
        s.serialize_field("branch_element", &self.branch_element())?;
        s.serialize_field("full", &self.full())?;
        s.end()
    }
}

/// Positions within a chart, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarSlot {
    Year,
    Month,
    Day,
    Hour,
}

pub const ALL_PILLAR_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Year,
    PillarSlot::Month,
    PillarSlot::Day,
    PillarSlot::Hour,
];

/// The year, month, day and hour pillars for one civil instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Instant the pillars were computed for.
    pub birth: CivilTime,
    /// Solar term in effect at `birth`.
    pub solar_term: SolarTerm,
}

impl FourPillars {
    /// Day stem, the reference point for all relations.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub const fn day_master_element(&self) -> Element {
        self.day.stem_element()
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub const fn get(&self, slot: PillarSlot) -> Pillar {
        match slot {
            PillarSlot::Year => self.year,
            PillarSlot::Month => self.month,
            PillarSlot::Day => self.day,
            PillarSlot::Hour => self.hour,
        }
    }

    /// Traditional month number (1 = 寅 month beginning at 立春).
    pub const fn month_number(&self) -> u8 {
        crate::rotation::month_position(self.month.branch()) + 1
    }

    /// All eight elements: four stem elements, then four branch elements.
    pub fn elements(&self) -> [Element; 8] {
        let p = self.pillars();
        [
            p[0].stem_element(),
            p[1].stem_element(),
            p[2].stem_element(),
            p[3].stem_element(),
            p[0].branch_element(),
            p[1].branch_element(),
            p[2].branch_element(),
            p[3].branch_element(),
        ]
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gz(text: &str) -> Pillar {
        Pillar::from(GanZhi::from_glyphs(text).unwrap())
    }

    fn sample() -> FourPillars {
        FourPillars {
            year: gz("甲子"),
            month: gz("壬申"),
            day: gz("甲戌"),
            hour: gz("戊辰"),
            birth: CivilTime::from_ymd_hm(1984, 8, 8, 8, 30).unwrap(),
            solar_term: SolarTerm::LiQiu,
        }
    }

    #[test]
    fn pillar_rejects_bad_parity() {
        assert!(Pillar::new(Stem::Jia, Branch::Chou).is_err());
        let p = Pillar::new(Stem::Ren, Branch::Shen).unwrap();
        assert_eq!(p.full(), "壬申");
        assert_eq!(p.stem_element(), Element::Water);
        assert_eq!(p.branch_element(), Element::Metal);
    }

    #[test]
    fn day_master_is_day_stem() {
        let fp = sample();
        assert_eq!(fp.day_master(), Stem::Jia);
        assert_eq!(fp.day_master_element(), Element::Wood);
    }

    #[test]
    fn month_number_from_branch() {
        // 申 is the seventh month
        assert_eq!(sample().month_number(), 7);
    }

    #[test]
    fn elements_in_stem_then_branch_order() {
        use Element::*;
        assert_eq!(
            sample().elements(),
            [Wood, Water, Wood, Earth, Water, Metal, Earth, Earth]
        );
    }

    #[test]
    fn display_joins_pillars() {
        assert_eq!(sample().to_string(), "甲子 壬申 甲戌 戊辰");
    }

    #[test]
    fn get_by_slot() {
        let fp = sample();
        for (slot, p) in ALL_PILLAR_SLOTS.iter().zip(fp.pillars()) {
            assert_eq!(fp.get(*slot), p);
        }
    }
}

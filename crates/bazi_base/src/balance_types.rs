//! Types for five-element balance analysis.
//!
//! Provides the scoring configuration (slot weights and strength thresholds)
//! and the result types produced by the balance module.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, ALL_RELATIONS, Element, Relation};
use crate::error::BaziError;
use crate::stem::Stem;

/// Weight added to a bucket for one slot, by relation to the day master.
///
/// When read from a file all five weights must be given together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotWeights {
    /// Same element as the day master (比劫).
    pub companion: f64,
    /// Produces the day master (印).
    pub resource: f64,
    /// Dominates the day master (官杀).
    pub officer: f64,
    /// Produced by the day master (食伤).
    pub output: f64,
    /// Dominated by the day master (财).
    pub wealth: f64,
}

impl SlotWeights {
    /// Heavenly-stem slot weights.
    pub const STEM: Self = Self {
        companion: 10.0,
        resource: 8.0,
        officer: 6.0,
        output: 4.0,
        wealth: 5.0,
    };

    /// Earthly-branch slot weights.
    pub const BRANCH: Self = Self {
        companion: 6.0,
        resource: 4.0,
        officer: 3.0,
        output: 2.0,
        wealth: 2.5,
    };

    pub const fn weight(&self, relation: Relation) -> f64 {
        match relation {
            Relation::Companion => self.companion,
            Relation::Resource => self.resource,
            Relation::Officer => self.officer,
            Relation::Output => self.output,
            Relation::Wealth => self.wealth,
        }
    }

    fn validate(&self) -> Result<(), BaziError> {
        let all = [
            self.companion,
            self.resource,
            self.officer,
            self.output,
            self.wealth,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(BaziError::InvalidConfig(
                "slot weights must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Multipliers on the draining total that separate the strength classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrengthThresholds {
    /// `supportive > draining * strong` → strong.
    pub strong: f64,
    /// `supportive > draining * balanced` → balanced, else weak.
    pub balanced: f64,
}

impl Default for StrengthThresholds {
    fn default() -> Self {
        Self {
            strong: 1.3,
            balanced: 0.8,
        }
    }
}

/// Configuration for the balance analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BalanceConfig {
    /// Seed weight for the day stem itself.
    pub self_weight: f64,
    pub stem: SlotWeights,
    pub branch: SlotWeights,
    pub thresholds: StrengthThresholds,
    /// Tally count at or above which an element is reported as excessive.
    pub excessive_count: u8,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            self_weight: 10.0,
            stem: SlotWeights::STEM,
            branch: SlotWeights::BRANCH,
            thresholds: StrengthThresholds::default(),
            excessive_count: 5,
        }
    }
}

impl BalanceConfig {
    pub fn validate(&self) -> Result<(), BaziError> {
        if !self.self_weight.is_finite() || self.self_weight < 0.0 {
            return Err(BaziError::InvalidConfig(
                "self_weight must be finite and non-negative",
            ));
        }
        self.stem.validate()?;
        self.branch.validate()?;
        let StrengthThresholds { strong, balanced } = self.thresholds;
        if !strong.is_finite() || !balanced.is_finite() || balanced < 0.0 {
            return Err(BaziError::InvalidConfig(
                "thresholds must be finite and non-negative",
            ));
        }
        if strong < balanced {
            return Err(BaziError::InvalidConfig(
                "strong threshold must not be below balanced threshold",
            ));
        }
        if self.excessive_count == 0 || self.excessive_count > 8 {
            return Err(BaziError::InvalidConfig(
                "excessive_count must be in 1..=8",
            ));
        }
        Ok(())
    }
}

/// Day-master strength class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Balanced,
    Weak,
}

impl Strength {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Balanced => "balanced",
            Self::Weak => "weak",
        }
    }

    /// Traditional label (身强 / 中和 / 身弱).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "身强",
            Self::Balanced => "中和",
            Self::Weak => "身弱",
        }
    }
}

/// Element counts over the eight stem/branch slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    pub(crate) fn add(&mut self, element: Element) {
        self.counts[element.index() as usize] += 1;
    }

    pub const fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Sum over all elements; 8 for any tally built from four pillars.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// `(element, count)` pairs in production order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|e| (*e, self.count(*e)))
    }

    /// Elements absent from every slot.
    pub fn missing(&self) -> Vec<Element> {
        self.iter().filter(|(_, c)| *c == 0).map(|(e, _)| e).collect()
    }

    /// Elements occupying at least `threshold` slots.
    pub fn excessive(&self, threshold: u8) -> Vec<Element> {
        self.iter()
            .filter(|(_, c)| *c >= threshold)
            .map(|(e, _)| e)
            .collect()
    }
}

impl Serialize for ElementTally {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(ALL_ELEMENTS.len()))?;
        for (element, count) in self.iter() {
            map.serialize_entry(element.name(), &count)?;
        }
        map.end()
    }
}

/// Weighted energy buckets around the day master.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthScore {
    /// Seed weight of the day stem itself.
    pub day_master: f64,
    /// 比劫
    pub companion: f64,
    /// 印
    pub resource: f64,
    /// 食伤
    pub output: f64,
    /// 财
    pub wealth: f64,
    /// 官杀
    pub officer: f64,
    pub strength: Strength,
}

impl StrengthScore {
    /// `day_master + companion + resource`.
    pub fn supportive(&self) -> f64 {
        ALL_RELATIONS
            .iter()
            .filter(|r| r.is_supportive())
            .fold(self.day_master, |acc, &r| acc + self.bucket(r))
    }

    /// `output + wealth + officer`.
    pub fn draining(&self) -> f64 {
        ALL_RELATIONS
            .iter()
            .filter(|r| !r.is_supportive())
            .map(|&r| self.bucket(r))
            .sum()
    }

    /// Accumulated weight for one relation.
    pub const fn bucket(&self, relation: Relation) -> f64 {
        match relation {
            Relation::Companion => self.companion,
            Relation::Resource => self.resource,
            Relation::Officer => self.officer,
            Relation::Output => self.output,
            Relation::Wealth => self.wealth,
        }
    }
}

/// Useful, supportive and unfavorable elements for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YongShen {
    pub useful: Element,
    pub supportive: Element,
    pub unfavorable: Vec<Element>,
    pub strength: Strength,
}

/// Everything the analyzer derives from one set of four pillars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    pub day_master: Stem,
    pub day_master_element: Element,
    pub tally: ElementTally,
    pub score: StrengthScore,
    pub yongshen: YongShen,
    pub missing: Vec<Element>,
    pub excessive: Vec<Element>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BalanceConfig::default().validate().is_ok());
    }

    #[test]
    fn weights_by_relation() {
        assert_eq!(SlotWeights::STEM.weight(Relation::Companion), 10.0);
        assert_eq!(SlotWeights::STEM.weight(Relation::Wealth), 5.0);
        assert_eq!(SlotWeights::BRANCH.weight(Relation::Officer), 3.0);
        assert_eq!(SlotWeights::BRANCH.weight(Relation::Wealth), 2.5);
    }

    #[test]
    fn totals_follow_buckets() {
        let score = StrengthScore {
            day_master: 10.0,
            companion: 6.0,
            resource: 8.0,
            output: 4.0,
            wealth: 2.5,
            officer: 3.0,
            strength: Strength::Strong,
        };
        assert_eq!(score.bucket(Relation::Resource), 8.0);
        assert_eq!(score.bucket(Relation::Wealth), 2.5);
        assert_eq!(score.supportive(), 24.0);
        assert_eq!(score.draining(), 9.5);
        let all: f64 = ALL_RELATIONS.iter().map(|&r| score.bucket(r)).sum();
        assert_eq!(all + score.day_master, score.supportive() + score.draining());
    }

    #[test]
    fn negative_weight_rejected() {
        let mut cfg = BalanceConfig::default();
        cfg.branch.output = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(BaziError::InvalidConfig(_))
        ));
    }

    #[test]
    fn inverted_thresholds_rejected() {
        let mut cfg = BalanceConfig::default();
        cfg.thresholds.strong = 0.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn excessive_count_bounds() {
        let mut cfg = BalanceConfig::default();
        cfg.excessive_count = 0;
        assert!(cfg.validate().is_err());
        cfg.excessive_count = 9;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn tally_missing_and_excessive() {
        let mut t = ElementTally::default();
        for _ in 0..5 {
            t.add(Element::Earth);
        }
        t.add(Element::Wood);
        t.add(Element::Water);
        t.add(Element::Water);
        assert_eq!(t.total(), 8);
        assert_eq!(t.missing(), vec![Element::Fire, Element::Metal]);
        assert_eq!(t.excessive(5), vec![Element::Earth]);
        assert!(t.excessive(6).is_empty());
    }

    #[test]
    fn strength_strings() {
        assert_eq!(Strength::Strong.as_str(), "strong");
        assert_eq!(Strength::Balanced.as_str(), "balanced");
        assert_eq!(Strength::Weak.as_str(), "weak");
    }
}

//! Five-element balance: tally, day-master strength, and yongshen.
//!
//! The day stem seeds the self bucket. Every other slot (three stems and four
//! branches) adds its configured weight to the bucket of its relation to the
//! day-master element. Stems weigh more than branches.

use crate::balance_types::{
    BalanceConfig, BalanceReport, ElementTally, Strength, StrengthScore, StrengthThresholds,
    YongShen,
};
use crate::element::{Element, Relation};
use crate::pillar::FourPillars;

/// Count the element of each of the eight stem/branch slots.
pub fn count_elements(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();
    for e in pillars.elements() {
        tally.add(e);
    }
    tally
}

/// Classify strength from the supportive and draining totals.
///
/// Comparisons are strict: equality falls to the weaker class.
pub fn classify_strength(
    supportive: f64,
    draining: f64,
    thresholds: &StrengthThresholds,
) -> Strength {
    if supportive > draining * thresholds.strong {
        Strength::Strong
    } else if supportive > draining * thresholds.balanced {
        Strength::Balanced
    } else {
        Strength::Weak
    }
}

/// Score the day master's strength.
pub fn score_strength(pillars: &FourPillars, config: &BalanceConfig) -> StrengthScore {
    let dm = pillars.day_master_element();
    let mut score = StrengthScore {
        day_master: config.self_weight,
        companion: 0.0,
        resource: 0.0,
        output: 0.0,
        wealth: 0.0,
        officer: 0.0,
        strength: Strength::Weak,
    };

    let stems = [pillars.year, pillars.month, pillars.hour].map(|p| p.stem_element());
    for e in stems {
        let rel = e.relation_to(dm);
        add_to_bucket(&mut score, rel, config.stem.weight(rel));
    }
    for p in pillars.pillars() {
        let rel = p.branch_element().relation_to(dm);
        add_to_bucket(&mut score, rel, config.branch.weight(rel));
    }

    score.strength = classify_strength(score.supportive(), score.draining(), &config.thresholds);
    score
}

fn add_to_bucket(score: &mut StrengthScore, relation: Relation, weight: f64) {
    let bucket = match relation {
        Relation::Companion => &mut score.companion,
        Relation::Resource => &mut score.resource,
        Relation::Officer => &mut score.officer,
        Relation::Output => &mut score.output,
        Relation::Wealth => &mut score.wealth,
    };
    *bucket += weight;
}

/// Pick the useful, supportive and unfavorable elements.
///
/// - Weak: the day-master element if companions outweigh or equal resources,
///   otherwise the resource element.
/// - Strong: the element of the heaviest draining bucket, ties resolved
///   officer, then output, then wealth. With all three empty the wealth
///   element is used.
/// - Balanced: the month branch's element.
///
/// The supportive element always produces the useful element.
pub fn determine_yongshen(pillars: &FourPillars, score: &StrengthScore) -> YongShen {
    let dm = pillars.day_master_element();
    let (useful, unfavorable) = match score.strength {
        Strength::Weak => {
            let useful = if score.companion >= score.resource {
                dm
            } else {
                dm.generated_by()
            };
            (useful, useful.controlled_by())
        }
        Strength::Strong => (strongest_drain(dm, score), dm.generated_by()),
        Strength::Balanced => {
            let useful = pillars.month.branch_element();
            (useful, useful.controlled_by())
        }
    };
    YongShen {
        useful,
        supportive: useful.generated_by(),
        unfavorable: vec![unfavorable],
        strength: score.strength,
    }
}

fn strongest_drain(dm: Element, score: &StrengthScore) -> Element {
    let candidates = [
        (score.officer, dm.controlled_by()),
        (score.output, dm.generates()),
        (score.wealth, dm.controls()),
    ];
    let mut best: Option<(f64, Element)> = None;
    for (weight, element) in candidates {
        if weight > best.map_or(0.0, |(w, _)| w) {
            best = Some((weight, element));
        }
    }
    best.map_or(dm.controls(), |(_, e)| e)
}

/// Run the full analysis for one set of pillars.
pub fn analyze_balance(pillars: &FourPillars, config: &BalanceConfig) -> BalanceReport {
    let tally = count_elements(pillars);
    let score = score_strength(pillars, config);
    let yongshen = determine_yongshen(pillars, &score);
    BalanceReport {
        day_master: pillars.day_master(),
        day_master_element: pillars.day_master_element(),
        missing: tally.missing(),
        excessive: tally.excessive(config.excessive_count),
        tally,
        score,
        yongshen,
    }
}

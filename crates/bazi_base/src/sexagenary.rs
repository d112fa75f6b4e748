//! The sexagenary (60-term) stem-branch cycle.
//!
//! Term `i` pairs stem `i mod 10` with branch `i mod 12`. Only stem/branch
//! pairs of equal polarity occur, so 60 of the 120 combinations are valid.
//! The epoch is CE 4 = 甲子 (index 0).

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::BaziError;
use crate::stem::{ALL_STEMS, Stem};

/// A stem/branch pair drawn from the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

/// The full cycle in order (index 0 = 甲子, index 59 = 癸亥).
pub const SEXAGENARY_CYCLE: [GanZhi; 60] = build_cycle();

const fn build_cycle() -> [GanZhi; 60] {
    let mut out = [GanZhi {
        stem: Stem::Jia,
        branch: Branch::Zi,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = GanZhi {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        };
        i += 1;
    }
    out
}

/// Reference epoch: CE 4 = 甲子.
pub const SEXAGENARY_EPOCH_YEAR: i32 = 4;

impl GanZhi {
    /// Pair a stem and branch, rejecting mismatched polarity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaziError> {
        combine(stem, branch)?;
        Ok(Self { stem, branch })
    }

    /// Position in the 60-cycle (0..=59).
    pub const fn index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Cycle term at an arbitrary signed offset from 甲子.
    pub const fn from_offset(offset: i64) -> Self {
        SEXAGENARY_CYCLE[offset.rem_euclid(60) as usize]
    }

    /// The term `n` steps later (wraps).
    pub const fn advance(self, n: i64) -> Self {
        Self::from_offset(self.index() as i64 + n)
    }

    /// Two-glyph string such as "甲子".
    pub fn glyphs(self) -> String {
        format!("{}{}", self.stem.glyph(), self.branch.glyph())
    }

    /// Parse a two-glyph string such as "甲子".
    pub fn from_glyphs(text: &str) -> Result<Self, BaziError> {
        let mut chars = text.chars();
        let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BaziError::UnknownName(text.to_string()));
        };
        let stem = Stem::from_glyph(s.encode_utf8(&mut [0; 4]))?;
        let branch = Branch::from_glyph(b.encode_utf8(&mut [0; 4]))?;
        Self::new(stem, branch)
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

/// Cycle ordinal for a stem/branch pair.
///
/// Fails with [`BaziError::MismatchedParity`] when the polarities differ.
pub fn combine(stem: Stem, branch: Branch) -> Result<u8, BaziError> {
    if stem.is_yang() != branch.is_yang() {
        return Err(BaziError::MismatchedParity {
            stem: stem.index(),
            branch: branch.index(),
        });
    }
    Ok(GanZhi { stem, branch }.index())
}

/// [`combine`] on raw ordinals, range-checking both.
pub fn combine_indices(stem: usize, branch: usize) -> Result<u8, BaziError> {
    combine(Stem::from_index(stem)?, Branch::from_index(branch)?)
}

/// Split a cycle ordinal into its stem and branch.
pub fn decompose(index: usize) -> Result<(Stem, Branch), BaziError> {
    BaziError::check_index("sexagenary", index, SEXAGENARY_CYCLE.len())?;
    let gz = SEXAGENARY_CYCLE[index];
    Ok((gz.stem, gz.branch))
}

/// Determine the cycle term for a given CE year (Gregorian year number).
///
/// Returns `(ganzhi, order)` where order is 1-based (1..=60).
pub fn ganzhi_from_year(ce_year: i32) -> (GanZhi, u8) {
    let offset = (ce_year - SEXAGENARY_EPOCH_YEAR).rem_euclid(60) as u8;
    (SEXAGENARY_CYCLE[offset as usize], offset + 1)
}

//! Stem rotation tables for month and hour pillars.
//!
//! The month stem follows the "five tigers" rule: the year stem fixes the stem
//! of the 寅 month, and later months advance one stem each. The hour stem
//! follows the "five rats" rule: the day stem fixes the stem of the 子 hour.
//! Rows repeat with period 5 because stems five apart share a starting stem.

use crate::branch::{ALL_BRANCHES, Branch};
use crate::stem::{ALL_STEMS, Stem};

/// Month stem ordinal, indexed `[year_stem][month_position % 10]`.
///
/// Month position 0 is the 寅 month beginning at 立春.
#[rustfmt::skip]
pub const FIVE_TIGER: [[u8; 10]; 10] = [
    [2, 3, 4, 5, 6, 7, 8, 9, 0, 1], // 甲
    [4, 5, 6, 7, 8, 9, 0, 1, 2, 3], // 乙
    [6, 7, 8, 9, 0, 1, 2, 3, 4, 5], // 丙
    [8, 9, 0, 1, 2, 3, 4, 5, 6, 7], // 丁
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9], // 戊
    [2, 3, 4, 5, 6, 7, 8, 9, 0, 1], // 己
    [4, 5, 6, 7, 8, 9, 0, 1, 2, 3], // 庚
    [6, 7, 8, 9, 0, 1, 2, 3, 4, 5], // 辛
    [8, 9, 0, 1, 2, 3, 4, 5, 6, 7], // 壬
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9], // 癸
];

/// Hour stem ordinal, indexed `[day_stem][hour_branch]`.
#[rustfmt::skip]
pub const FIVE_RAT: [[u8; 12]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1], // 甲
    [2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3], // 乙
    [4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5], // 丙
    [6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7], // 丁
    [8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9], // 戊
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1], // 己
    [2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3], // 庚
    [4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5], // 辛
    [6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6, 7], // 壬
    [8, 9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9], // 癸
];

/// Month branches in month-position order: 寅 (position 0) through 丑 (position 11).
pub const MONTH_BRANCHES: [Branch; 12] = [
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
    Branch::Zi,
    Branch::Chou,
];

/// Month position (0 = 寅 .. 11 = 丑) of a month branch.
pub const fn month_position(branch: Branch) -> u8 {
    (branch.index() + 10) % 12
}

/// Branch of the month at `position` (taken mod 12).
pub const fn month_branch(position: u8) -> Branch {
    ALL_BRANCHES[((position % 12 + 2) % 12) as usize]
}

/// Month stem for a year stem and month branch.
pub const fn month_stem(year_stem: Stem, month_branch: Branch) -> Stem {
    let pos = month_position(month_branch) % 10;
    ALL_STEMS[FIVE_TIGER[year_stem.index() as usize][pos as usize] as usize]
}

/// Hour stem for a day stem and hour branch.
pub const fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    ALL_STEMS[FIVE_RAT[day_stem.index() as usize][hour_branch.index() as usize] as usize]
}

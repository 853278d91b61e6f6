//! Chart strength score (0–100) used to seed downstream rankings.
//!
//! score = 50
//!       + (5 - (max - min)) * 5          balance
//!       + {2,3} → 15, {1,4} → 5, else 0  day-master count
//!       + favorable count * 8
//! clamped to [0, 100].
//!
//! Counts of 5 and above get no day-master bonus.

use crate::element::Element;
use crate::histogram::ElementHistogram;

pub const SCORE_BASE: i32 = 50;
pub const BALANCE_PIVOT: i32 = 5;
pub const BALANCE_WEIGHT: i32 = 5;
pub const FAVORABLE_WEIGHT: i32 = 8;
pub const SCORE_MAX: u8 = 100;

/// Day-master bonus for a raw count.
pub const fn day_master_bonus(count: u8) -> i32 {
    match count {
        2 | 3 => 15,
        1 | 4 => 5,
        _ => 0,
    }
}

/// Balance contribution for a histogram spread. Ranges over [-15, 25].
pub const fn balance_bonus(spread: u8) -> i32 {
    (BALANCE_PIVOT - spread as i32) * BALANCE_WEIGHT
}

/// Compute the strength score.
pub fn strength_score(
    histogram: &ElementHistogram,
    day_master: Element,
    favorable: Element,
) -> u8 {
    let raw = SCORE_BASE
        + balance_bonus(histogram.spread())
        + day_master_bonus(histogram.count(day_master))
        + histogram.count(favorable) as i32 * FAVORABLE_WEIGHT;
    raw.clamp(0, SCORE_MAX as i32) as u8
}

//! Fortune seed range derived from the strength score.
//!
//! Amounts are in units of 10,000. The range only bounds a downstream
//! estimate; picking a value inside it is up to the consumer.

use serde::{Deserialize, Serialize};

/// Lowest value the range may start at.
pub const FORTUNE_FLOOR: u32 = 50;
pub const RANGE_LOW_PER_POINT: u32 = 30;
pub const RANGE_HIGH_PER_POINT: u32 = 50;
pub const BASELINE_PER_POINT: u32 = 8;

/// Inclusive amount range seeded by a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneRange {
    pub low: u32,
    pub high: u32,
}

impl FortuneRange {
    pub const fn contains(&self, amount: u32) -> bool {
        amount >= self.low && amount <= self.high
    }
}

/// Score with its seed range and baseline amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneSummary {
    pub score: u8,
    pub range: FortuneRange,
    pub baseline: u32,
}

impl FortuneSummary {
    pub fn from_score(score: u8) -> Self {
        Self {
            score,
            range: fortune_range(score),
            baseline: baseline_fortune(score),
        }
    }
}

/// `low = max(50, score * 30)`, `high = score * 50`, never below `low`.
pub fn fortune_range(score: u8) -> FortuneRange {
    let score = u32::from(score);
    let low = FORTUNE_FLOOR.max(score * RANGE_LOW_PER_POINT);
    let high = (score * RANGE_HIGH_PER_POINT).max(low);
    FortuneRange { low, high }
}

/// Deterministic fallback amount: `50 + score * 8`.
pub fn baseline_fortune(score: u8) -> u32 {
    FORTUNE_FLOOR + u32::from(score) * BASELINE_PER_POINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_for_typical_score() {
        let r = fortune_range(73);
        assert_eq!(r, FortuneRange { low: 2190, high: 3650 });
        assert!(r.contains(3650));
        assert!(!r.contains(2189));
    }

    #[test]
    fn floor_applies_to_small_scores() {
        assert_eq!(fortune_range(1), FortuneRange { low: 50, high: 50 });
        assert_eq!(fortune_range(0), FortuneRange { low: 50, high: 50 });
        assert_eq!(fortune_range(2), FortuneRange { low: 60, high: 100 });
    }

    #[test]
    fn summary_serializes_range_and_baseline() {
        let s = FortuneSummary::from_score(93);
        let v: serde_json::Value = serde_json::to_value(s).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "score": 93,
                "range": { "low": 2790, "high": 4650 },
                "baseline": 794,
            })
        );
    }

    #[test]
    fn baseline() {
        assert_eq!(baseline_fortune(0), 50);
        assert_eq!(baseline_fortune(100), 850);
    }
}

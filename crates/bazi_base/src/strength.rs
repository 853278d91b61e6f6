//! Day-master strength classification.
//!
//! The day-master element's histogram count falls into one of three
//! inclusive bands over [0, 8]: Weak [0, 1], Balanced [2, 3], Strong [4, 8].

use crate::element::Element;
use crate::histogram::ElementHistogram;

/// Strength band of the day-master element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum StrengthClass {
    Weak,
    Balanced,
    Strong,
}

/// Highest count still classified as weak.
pub const WEAK_MAX_COUNT: u8 = 1;
/// Highest count still classified as balanced.
pub const BALANCED_MAX_COUNT: u8 = 3;

impl StrengthClass {
    /// Classify a raw day-master count.
    pub const fn from_count(count: u8) -> Self {
        if count <= WEAK_MAX_COUNT {
            Self::Weak
        } else if count <= BALANCED_MAX_COUNT {
            Self::Balanced
        } else {
            Self::Strong
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Balanced => "balanced",
            Self::Strong => "strong",
        }
    }
}

/// Classify the strength of `day_master` within `histogram`.
pub fn classify_strength(histogram: &ElementHistogram, day_master: Element) -> StrengthClass {
    StrengthClass::from_count(histogram.count(day_master))
}

//! Pairing score between two charts.
//!
//! Base 60, +10 when both day-masters share an element, +15 when both charts
//! share a favorable element.

use bazi_base::{Relation, relation_of};
use serde::{Deserialize, Serialize};

use crate::report::BaziReport;

pub const PAIRING_BASE: u8 = 60;
pub const SAME_DAY_MASTER_BONUS: u8 = 10;
pub const SAME_FAVORABLE_BONUS: u8 = 15;

/// Pairing result for two reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// 60..=85.
    pub score: u8,
    pub same_day_master_element: bool,
    pub same_favorable_element: bool,
    /// Relation of the first day-master element to the second.
    pub day_master_relation: Relation,
    /// Relation of the second day-master element to the first.
    pub reverse_relation: Relation,
}

/// Score the pairing of `first` with `second`.
pub fn compatibility(first: &BaziReport, second: &BaziReport) -> CompatibilityReport {
    let same_day_master_element = first.day_master_element == second.day_master_element;
    let same_favorable_element = first.favorable_element == second.favorable_element;

    let mut score = PAIRING_BASE;
    if same_day_master_element {
        score += SAME_DAY_MASTER_BONUS;
    }
    if same_favorable_element {
        score += SAME_FAVORABLE_BONUS;
    }

    CompatibilityReport {
        score,
        same_day_master_element,
        same_favorable_element,
        day_master_relation: relation_of(first.day_master_element, second.day_master_element),
        reverse_relation: relation_of(second.day_master_element, first.day_master_element),
    }
}

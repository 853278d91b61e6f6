//! Four-pillars (bazi) element classification.
//!
//! This crate provides:
//! - Stem and branch alphabets with their five-element assignment
//! - Pillar and four-pillar chart types, parsed from hanzi or pinyin labels
//! - Element histogram, day-master strength class and favorable element
//! - Generation/control relations between elements
//! - The 0–100 chart strength score
//!
//! Everything past pillar construction is a pure, total function over `Copy`
//! values. Converting a birth instant into pillars is left to the caller.

pub mod branch;
pub mod element;
pub mod error;
pub mod favorable;
pub mod histogram;
pub mod pillar;
pub mod relation;
pub mod score;
pub mod stem;
pub mod strength;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element};
pub use error::{BaziError, SymbolKind};
pub use favorable::resolve_favorable_element;
pub use histogram::{ElementHistogram, HISTOGRAM_TOTAL, PROMINENT_MIN_COUNT, build_histogram};
pub use pillar::{ALL_POSITIONS, FourPillars, Pillar, PillarPosition};
pub use relation::{Relation, relation_of};
pub use score::{balance_bonus, day_master_bonus, strength_score};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{StrengthClass, classify_strength};

//! Chart reports on top of `bazi_base`.
//!
//! Runs the classification pipeline end to end and packages the result as a
//! serializable [`BaziReport`], with batch, pairing and fortune-range helpers.
//!
//! # Quick start
//!
//! ```rust
//! use bazi_rs::*;
//!
//! let report = analyze_labels(["甲子", "丙寅", "戊辰", "庚申"]).unwrap();
//! assert_eq!(report.day_master_element, Element::Earth);
//! assert_eq!(report.favorable_element, Element::Fire);
//! assert_eq!(report.score, 93);
//! ```

pub mod batch;
pub mod compatibility;
pub mod fortune;
pub mod report;

pub use batch::{analyze_batch, analyze_batch_sequential, analyze_labels_batch};
pub use compatibility::{CompatibilityReport, compatibility};
pub use fortune::{FortuneRange, FortuneSummary, baseline_fortune, fortune_range};
pub use report::{
    BaziReport, ElementCounts, PillarElements, PillarLabels, analyze, analyze_labels,
};

// Re-export core types so callers don't need to depend on bazi_base directly.
pub use bazi_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, BaziError, Branch, Element, FourPillars, Pillar,
    Relation, Stem, StrengthClass, SymbolKind, relation_of,
};

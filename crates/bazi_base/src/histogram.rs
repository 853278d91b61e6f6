//! Five-element histogram over the eight characters of a chart.
//!
//! Each pillar contributes its stem element and, independently, its branch
//! element, so every chart yields exactly 8 counts over 5 buckets.

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;

/// Number of characters counted per chart (4 stems + 4 branches).
pub const HISTOGRAM_TOTAL: u8 = 8;

/// Minimum count for an element to be listed as prominent.
pub const PROMINENT_MIN_COUNT: u8 = 2;

/// Element counts indexed by [`Element::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHistogram {
    counts: [u8; 5],
}

/// Count the elements of all four stems and all four branches.
pub fn build_histogram(pillars: &FourPillars) -> ElementHistogram {
    let mut counts = [0u8; 5];
    for pillar in pillars.as_array() {
        counts[pillar.stem.element().index() as usize] += 1;
        counts[pillar.branch.element().index() as usize] += 1;
    }
    ElementHistogram { counts }
}

impl ElementHistogram {
    pub const fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Raw counts in canonical element order.
    pub const fn counts(&self) -> [u8; 5] {
        self.counts
    }

    /// Sum of all counts. Always [`HISTOGRAM_TOTAL`] for a built histogram.
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn min_count(&self) -> u8 {
        self.counts.iter().copied().min().unwrap_or(0)
    }

    /// Difference between the largest and smallest bucket.
    pub fn spread(&self) -> u8 {
        self.max_count() - self.min_count()
    }

    /// `(element, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.count(e)))
    }

    /// Elements with count >= 2, highest count first.
    ///
    /// Ties keep canonical order (Metal, Wood, Water, Fire, Earth).
    pub fn prominent(&self) -> Vec<Element> {
        let mut entries: Vec<(Element, u8)> = self
            .iter()
            .filter(|&(_, c)| c >= PROMINENT_MIN_COUNT)
            .collect();
        // stable: equal counts stay in canonical order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().map(|(e, _)| e).collect()
    }

    /// Elements that never occur, in canonical order.
    pub fn absent(&self) -> Vec<Element> {
        self.iter()
            .filter(|&(_, c)| c == 0)
            .map(|(e, _)| e)
            .collect()
    }
}

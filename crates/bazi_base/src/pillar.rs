//! Pillars (zhu): one stem + one branch per time unit.
//!
//! A pillar's own element is the element of its stem. The branch element is
//! only consulted when building the histogram.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::Branch;
use crate::element::Element;
use crate::error::{BaziError, SymbolKind};
use crate::stem::Stem;

/// Position of a pillar within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// A stem + branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Build a pillar from separate stem and branch symbols.
    pub fn from_symbols(stem: &str, branch: &str) -> Result<Self, BaziError> {
        Ok(Self::new(Stem::from_symbol(stem)?, Branch::from_symbol(branch)?))
    }

    /// Parse a combined label.
    ///
    /// Accepts two hanzi (`"甲子"`) or pinyin separated by `-` or whitespace
    /// (`"Jia-Zi"`, `"jia zi"`).
    pub fn parse(label: &str) -> Result<Self, BaziError> {
        let label = label.trim();
        if let Some((stem, branch)) = label.split_once(|c: char| c == '-' || c.is_whitespace()) {
            return Self::from_symbols(stem, branch);
        }
        let split = label
            .chars()
            .next()
            .map(char::len_utf8)
            .ok_or_else(|| BaziError::invalid(SymbolKind::Stem, label))?;
        let (stem, branch) = label.split_at(split);
        Self::from_symbols(stem, branch)
    }

    /// Element of the pillar, defined by its stem.
    pub const fn element(self) -> Element {
        self.stem.element()
    }

    /// Combined hanzi label, e.g. `"甲子"`.
    pub fn label(self) -> String {
        format!("{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

impl FromStr for Pillar {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The four pillars of a chart: year, month, day, hour.
///
/// The day pillar's stem is the day-master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parse four combined labels in year, month, day, hour order.
    pub fn from_labels(labels: [&str; 4]) -> Result<Self, BaziError> {
        let [year, month, day, hour] = labels;
        Ok(Self::new(
            Pillar::parse(year)?,
            Pillar::parse(month)?,
            Pillar::parse(day)?,
            Pillar::parse(hour)?,
        ))
    }

    /// Pillar at the given position.
    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in chart order.
    pub const fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Stem of the day pillar.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    pub const fn day_master_element(&self) -> Element {
        self.day.stem.element()
    }

    /// Element of the month pillar (its stem), the balanced-case fallback.
    pub const fn month_element(&self) -> Element {
        self.month.element()
    }

    /// Combined labels in chart order.
    pub fn labels(&self) -> [String; 4] {
        self.as_array().map(Pillar::label)
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hanzi_label() {
        let p = Pillar::parse("甲子").unwrap();
        assert_eq!(p, Pillar::new(Stem::Jia, Branch::Zi));
        assert_eq!(p.label(), "甲子");
    }

    #[test]
    fn parse_pinyin_label() {
        assert_eq!(
            Pillar::parse("Geng-Shen").unwrap(),
            Pillar::new(Stem::Geng, Branch::Shen)
        );
        assert_eq!(
            Pillar::parse("ren zi").unwrap(),
            Pillar::new(Stem::Ren, Branch::Zi)
        );
    }

    #[test]
    fn element_comes_from_stem() {
        // 甲 is Wood, 申 is Metal
        let p = Pillar::new(Stem::Jia, Branch::Shen);
        assert_eq!(p.element(), Element::Wood);
    }

    #[test]
    fn missing_branch_is_invalid() {
        let err = Pillar::parse("甲").unwrap_err();
        assert_eq!(err, BaziError::invalid(SymbolKind::Branch, ""));
    }

    #[test]
    fn extra_character_is_invalid() {
        let err = Pillar::parse("甲子丑").unwrap_err();
        assert_eq!(err, BaziError::invalid(SymbolKind::Branch, "子丑"));
    }

    #[test]
    fn empty_label_is_invalid() {
        let err = Pillar::parse("  ").unwrap_err();
        assert!(matches!(
            err,
            BaziError::InvalidSymbol {
                kind: SymbolKind::Stem,
                ..
            }
        ));
    }

    #[test]
    fn swapped_order_is_invalid() {
        assert!(Pillar::parse("子甲").is_err());
    }

    #[test]
    fn four_pillars_accessors() {
        let fp = FourPillars::from_labels(["甲子", "丙寅", "戊辰", "庚申"]).unwrap();
        assert_eq!(fp.day_master(), Stem::Wu);
        assert_eq!(fp.day_master_element(), Element::Earth);
        assert_eq!(fp.month_element(), Element::Fire);
        assert_eq!(fp.get(PillarPosition::Hour).label(), "庚申");
        assert_eq!(fp.to_string(), "甲子 丙寅 戊辰 庚申");
        assert_eq!(fp.labels(), ["甲子", "丙寅", "戊辰", "庚申"].map(String::from));
    }

    #[test]
    fn positions_in_chart_order() {
        let fp = FourPillars::from_labels(["甲子", "丙寅", "戊辰", "庚申"]).unwrap();
        let via_get: Vec<Pillar> = ALL_POSITIONS.iter().map(|&p| fp.get(p)).collect();
        assert_eq!(via_get, fp.as_array().to_vec());
    }
}

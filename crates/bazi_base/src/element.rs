//! The five elements (wuxing).
//!
//! Every stem and branch maps to exactly one element. The declaration order
//! below (Metal, Wood, Water, Fire, Earth) is the canonical order used for
//! histogram buckets, iteration and tie-breaking.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{BaziError, SymbolKind};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

/// All 5 elements in canonical order (0 = Metal, 4 = Earth).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "Metal",
            Self::Wood => "Wood",
            Self::Water => "Water",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
        }
    }

    /// Chinese character of the element.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// 0-based index (Metal=0 .. Earth=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Metal => 0,
            Self::Wood => 1,
            Self::Water => 2,
            Self::Fire => 3,
            Self::Earth => 4,
        }
    }

    /// All 5 elements in canonical order.
    pub const fn all() -> &'static [Element; 5] {
        &ALL_ELEMENTS
    }

    /// Parse a hanzi character or a case-insensitive English name.
    pub fn from_symbol(symbol: &str) -> Result<Self, BaziError> {
        let s = symbol.trim();
        ALL_ELEMENTS
            .iter()
            .copied()
            .find(|e| e.hanzi() == s || e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaziError::invalid(SymbolKind::Element, symbol))
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn parse_hanzi_and_english() {
        assert_eq!("金".parse::<Element>().unwrap(), Element::Metal);
        assert_eq!("fire".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!(" EARTH ".parse::<Element>().unwrap(), Element::Earth);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "未知".parse::<Element>().unwrap_err();
        assert_eq!(
            err,
            BaziError::InvalidSymbol {
                kind: SymbolKind::Element,
                symbol: "未知".into()
            }
        );
    }
}

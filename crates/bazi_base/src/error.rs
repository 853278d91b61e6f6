//! Error types for four-pillars classification.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Alphabet a rejected symbol was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Stem,
    Branch,
    Element,
}

impl SymbolKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Branch => "branch",
            Self::Element => "element",
        }
    }
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from pillar construction and symbol parsing.
///
/// Everything downstream of a valid [`FourPillars`](crate::FourPillars) is
/// total, so this is the only failure the core can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// A symbol outside the fixed 10-stem / 12-branch / 5-element alphabet.
    #[error("invalid {kind} symbol: {symbol:?}")]
    InvalidSymbol { kind: SymbolKind, symbol: String },
}

impl BaziError {
    pub(crate) fn invalid(kind: SymbolKind, symbol: impl Into<String>) -> Self {
        Self::InvalidSymbol {
            kind,
            symbol: symbol.into(),
        }
    }
}

//! Generation (sheng) and control (ke) cycles between elements.
//!
//! Generation: Wood → Fire → Earth → Metal → Water → Wood.
//! Control:    Wood → Earth → Water → Fire → Metal → Wood.
//!
//! Both are 5-cycles without fixed points, and for `a != b` at most one of
//! `generates(a) == b` and `controls(a) == b` holds.

use crate::element::Element::{self, Earth, Fire, Metal, Water, Wood};

// Tables indexed by Element::index(): Metal, Wood, Water, Fire, Earth.
const GENERATES: [Element; 5] = [Water, Fire, Wood, Earth, Metal];
const GENERATED_BY: [Element; 5] = [Earth, Water, Metal, Wood, Fire];
const CONTROLS: [Element; 5] = [Wood, Earth, Fire, Metal, Water];
const CONTROLLED_BY: [Element; 5] = [Fire, Metal, Earth, Water, Wood];

/// Relation of one element to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Relation {
    /// The first element produces the second.
    Generates,
    /// The first element restrains the second.
    Controls,
    Identical,
    Neutral,
}

impl Relation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generates => "generates",
            Self::Controls => "controls",
            Self::Identical => "identical",
            Self::Neutral => "neutral",
        }
    }
}

impl Element {
    /// The element this one produces.
    pub const fn generates(self) -> Element {
        GENERATES[self.index() as usize]
    }

    /// The element that produces this one.
    pub const fn generated_by(self) -> Element {
        GENERATED_BY[self.index() as usize]
    }

    /// The element this one restrains.
    pub const fn controls(self) -> Element {
        CONTROLS[self.index() as usize]
    }

    /// The element that restrains this one.
    pub const fn controlled_by(self) -> Element {
        CONTROLLED_BY[self.index() as usize]
    }
}

/// Relation of `a` to `b`. Directional: `relation_of(Wood, Fire)` is
/// `Generates`, `relation_of(Fire, Wood)` is `Neutral`.
pub const fn relation_of(a: Element, b: Element) -> Relation {
    if a.index() == b.index() {
        Relation::Identical
    } else if a.generates().index() == b.index() {
        Relation::Generates
    } else if a.controls().index() == b.index() {
        Relation::Controls
    } else {
        Relation::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;

    fn cycle_len(start: Element, step: fn(Element) -> Element) -> usize {
        let mut e = step(start);
        let mut n = 1;
        while e != start {
            e = step(e);
            n += 1;
        }
        n
    }

    #[test]
    fn generation_order() {
        assert_eq!(Wood.generates(), Fire);
        assert_eq!(Fire.generates(), Earth);
        assert_eq!(Earth.generates(), Metal);
        assert_eq!(Metal.generates(), Water);
        assert_eq!(Water.generates(), Wood);
    }

    #[test]
    fn control_order() {
        assert_eq!(Wood.controls(), Earth);
        assert_eq!(Earth.controls(), Water);
        assert_eq!(Water.controls(), Fire);
        assert_eq!(Fire.controls(), Metal);
        assert_eq!(Metal.controls(), Wood);
    }

    #[test]
    fn inverse_tables() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn control_skips_one_in_generation() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.controls(), e.generates().generates());
        }
    }

    #[test]
    fn single_five_cycles() {
        for e in ALL_ELEMENTS {
            assert_eq!(cycle_len(e, Element::generates), 5);
            assert_eq!(cycle_len(e, Element::controls), 5);
        }
    }

    #[test]
    fn identical_on_diagonal() {
        for e in ALL_ELEMENTS {
            assert_eq!(relation_of(e, e), Relation::Identical);
        }
    }

    #[test]
    fn relation_is_directional() {
        assert_eq!(relation_of(Wood, Fire), Relation::Generates);
        assert_eq!(relation_of(Fire, Wood), Relation::Neutral);
        assert_eq!(relation_of(Water, Fire), Relation::Controls);
        assert_eq!(relation_of(Fire, Water), Relation::Neutral);
    }

    #[test]
    fn row_distribution() {
        // each row: 1 identical, 1 generates, 1 controls, 2 neutral
        for a in ALL_ELEMENTS {
            let rels: Vec<Relation> = ALL_ELEMENTS.iter().map(|&b| relation_of(a, b)).collect();
            let n = |r: Relation| rels.iter().filter(|&&x| x == r).count();
            assert_eq!(n(Relation::Identical), 1);
            assert_eq!(n(Relation::Generates), 1);
            assert_eq!(n(Relation::Controls), 1);
            assert_eq!(n(Relation::Neutral), 2);
        }
    }
}

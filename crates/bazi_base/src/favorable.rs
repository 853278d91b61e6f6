//! Favorable element (yongshen), simplified.
//!
//! A strong day-master is restrained, a weak one is fed, and a balanced one
//! follows the month pillar.

use crate::element::Element;
use crate::strength::StrengthClass;

/// Resolve the single favorable element.
///
/// - Strong: the element that controls the day-master.
/// - Weak: the element that generates the day-master.
/// - Balanced: `month_element`, unchanged.
pub const fn resolve_favorable_element(
    strength: StrengthClass,
    day_master: Element,
    month_element: Element,
) -> Element {
    match strength {
        StrengthClass::Strong => day_master.controlled_by(),
        StrengthClass::Weak => day_master.generated_by(),
        StrengthClass::Balanced => month_element,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;

    #[test]
    fn strong_fire_wants_water() {
        let fav = resolve_favorable_element(StrengthClass::Strong, Element::Fire, Element::Wood);
        assert_eq!(fav, Element::Water);
    }

    #[test]
    fn weak_fire_wants_wood() {
        let fav = resolve_favorable_element(StrengthClass::Weak, Element::Fire, Element::Metal);
        assert_eq!(fav, Element::Wood);
    }

    #[test]
    fn balanced_returns_month_element() {
        for month in ALL_ELEMENTS {
            let fav = resolve_favorable_element(StrengthClass::Balanced, Element::Fire, month);
            assert_eq!(fav, month);
        }
    }

    #[test]
    fn strong_and_weak_ignore_month() {
        for month in ALL_ELEMENTS {
            assert_eq!(
                resolve_favorable_element(StrengthClass::Strong, Element::Metal, month),
                Element::Fire
            );
            assert_eq!(
                resolve_favorable_element(StrengthClass::Weak, Element::Metal, month),
                Element::Earth
            );
        }
    }
}

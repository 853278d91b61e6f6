//! Full chart report: the record handed to ranking and reporting consumers.

use bazi_base::{
    BaziError, Element, ElementHistogram, FourPillars, Stem, StrengthClass, build_histogram,
    classify_strength, resolve_favorable_element, strength_score,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Combined labels of the four pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarLabels {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

impl PillarLabels {
    pub fn from_chart(chart: &FourPillars) -> Self {
        let [year, month, day, hour] = chart.labels();
        Self {
            year,
            month,
            day,
            hour,
        }
    }
}

/// Element of each pillar, taken from its stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarElements {
    pub year: Element,
    pub month: Element,
    pub day: Element,
    pub hour: Element,
}

impl PillarElements {
    pub const fn from_chart(chart: &FourPillars) -> Self {
        Self {
            year: chart.year.element(),
            month: chart.month.element(),
            day: chart.day.element(),
            hour: chart.hour.element(),
        }
    }
}

/// Per-element counts with one named field per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts {
    pub metal: u8,
    pub wood: u8,
    pub water: u8,
    pub fire: u8,
    pub earth: u8,
}

impl ElementCounts {
    pub const fn get(&self, element: Element) -> u8 {
        match element {
            Element::Metal => self.metal,
            Element::Wood => self.wood,
            Element::Water => self.water,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
        }
    }

    /// Sum of all counts. Widened so deserialized counts cannot overflow.
    pub fn total(&self) -> u16 {
        [self.metal, self.wood, self.water, self.fire, self.earth]
            .into_iter()
            .map(u16::from)
            .sum()
    }
}

impl From<&ElementHistogram> for ElementCounts {
    fn from(h: &ElementHistogram) -> Self {
        Self {
            metal: h.count(Element::Metal),
            wood: h.count(Element::Wood),
            water: h.count(Element::Water),
            fire: h.count(Element::Fire),
            earth: h.count(Element::Earth),
        }
    }
}

/// Everything derived from one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaziReport {
    pub pillars: PillarLabels,
    pub pillar_elements: PillarElements,
    pub elements: ElementCounts,
    /// Stem of the day pillar.
    pub day_master: Stem,
    pub day_master_element: Element,
    pub strength: StrengthClass,
    /// Count >= 2, highest first.
    pub prominent_elements: Vec<Element>,
    /// Count == 0.
    pub absent_elements: Vec<Element>,
    pub favorable_element: Element,
    /// 0..=100.
    pub score: u8,
}

impl BaziReport {
    /// The four labels joined by spaces, e.g. `"甲子 丙寅 戊辰 庚申"`.
    pub fn bazi_string(&self) -> String {
        let p = &self.pillars;
        format!("{} {} {} {}", p.year, p.month, p.day, p.hour)
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Run the whole classification pipeline on one chart.
pub fn analyze(chart: &FourPillars) -> BaziReport {
    let histogram = build_histogram(chart);
    let day_master_element = chart.day_master_element();
    let strength = classify_strength(&histogram, day_master_element);
    let favorable_element =
        resolve_favorable_element(strength, day_master_element, chart.month_element());
    let score = strength_score(&histogram, day_master_element, favorable_element);

    debug!(
        chart = %chart,
        strength = strength.name(),
        favorable = favorable_element.name(),
        score,
        "analyzed chart"
    );

    BaziReport {
        pillars: PillarLabels::from_chart(chart),
        pillar_elements: PillarElements::from_chart(chart),
        elements: ElementCounts::from(&histogram),
        day_master: chart.day_master(),
        day_master_element,
        strength,
        prominent_elements: histogram.prominent(),
        absent_elements: histogram.absent(),
        favorable_element,
        score,
    }
}

/// Parse four labels (year, month, day, hour) and analyze them.
pub fn analyze_labels(labels: [&str; 4]) -> Result<BaziReport, BaziError> {
    Ok(analyze(&FourPillars::from_labels(labels)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_mirror_histogram() {
        let chart = FourPillars::from_labels(["甲子", "丙寅", "戊辰", "庚申"]).unwrap();
        let h = build_histogram(&chart);
        let counts = ElementCounts::from(&h);
        for e in Element::all() {
            assert_eq!(counts.get(*e), h.count(*e));
        }
        assert_eq!(counts.total(), 8);
    }

    #[test]
    fn total_does_not_overflow_on_deserialized_counts() {
        let counts: ElementCounts = serde_json::from_str(
            r#"{"metal":255,"wood":255,"water":255,"fire":255,"earth":255}"#,
        )
        .unwrap();
        assert_eq!(counts.total(), 1275);
    }

    #[test]
    fn pillar_elements_follow_stems() {
        let r = analyze_labels(["甲子", "丙寅", "戊辰", "庚申"]).unwrap();
        assert_eq!(
            r.pillar_elements,
            PillarElements {
                year: Element::Wood,
                month: Element::Fire,
                day: Element::Earth,
                hour: Element::Metal,
            }
        );
        assert_eq!(r.pillar_elements.month, Element::Fire);
    }

    #[test]
    fn bazi_string_joins_labels() {
        let r = analyze_labels(["甲子", "丙寅", "戊辰", "庚申"]).unwrap();
        assert_eq!(r.bazi_string(), "甲子 丙寅 戊辰 庚申");
    }

    #[test]
    fn invalid_label_propagates() {
        assert!(analyze_labels(["甲子", "丙寅", "戊X", "庚申"]).is_err());
    }
}

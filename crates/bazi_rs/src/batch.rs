//! Batch analysis.
//!
//! Charts are independent, so the parallel path is a plain rayon map and
//! yields the same reports, in the same order, as the sequential path.

use bazi_base::{BaziError, FourPillars};
use rayon::prelude::*;
use tracing::info;

use crate::report::{BaziReport, analyze, analyze_labels};

/// Analyze many charts on the rayon pool. Output order matches input order.
pub fn analyze_batch(charts: &[FourPillars]) -> Vec<BaziReport> {
    info!(count = charts.len(), parallel = true, "analyzing batch");
    charts.par_iter().map(analyze).collect()
}

/// Analyze many charts on the calling thread.
pub fn analyze_batch_sequential(charts: &[FourPillars]) -> Vec<BaziReport> {
    info!(count = charts.len(), parallel = false, "analyzing batch");
    charts.iter().map(analyze).collect()
}

/// Parse and analyze label quadruples. Returns one `Result` per entry.
pub fn analyze_labels_batch<S>(
    entries: &[[S; 4]],
    parallel: bool,
) -> Vec<Result<BaziReport, BaziError>>
where
    S: AsRef<str> + Sync,
{
    info!(count = entries.len(), parallel, "analyzing label batch");
    let one = |entry: &[S; 4]| analyze_labels(entry.each_ref().map(|s| s.as_ref()));
    if parallel {
        entries.par_iter().map(one).collect()
    } else {
        entries.iter().map(one).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch() {
        assert!(analyze_batch(&[]).is_empty());
        assert!(analyze_labels_batch::<&str>(&[], true).is_empty());
    }

    #[test]
    fn label_batch_keeps_errors_in_place() {
        let entries = [
            ["甲子", "丙寅", "戊辰", "庚申"],
            ["甲子", "丙寅", "未知", "庚申"],
            ["庚申", "壬子", "丙午", "戊辰"],
        ];
        let results = analyze_labels_batch(&entries, true);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().pillars.day, "丙午");
    }
}

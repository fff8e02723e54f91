pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::metrics::FormattedMetric;
use crate::model::summary::SubType;
use crate::model::thresholds::color_token;
use crate::model::verdict::Verdict;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayMetric {
    pub name: &'static str,
    pub value: Option<f64>,
    pub suffix: &'static str,
    pub band: Option<&'static str>,
    pub color: &'static str,
    pub display: String,
}

impl From<&FormattedMetric> for DisplayMetric {
    fn from(m: &FormattedMetric) -> Self {
        Self {
            name: m.name,
            value: m.normalized.value,
            suffix: m.normalized.suffix,
            band: m.band,
            color: color_token(m.color),
            display: m.display(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub label: String,
    pub sub_type: SubType,
    pub verdict: Verdict,
    pub color: &'static str,
    pub metrics: Vec<DisplayMetric>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerdictTally {
    pub passed: usize,
    pub warning: usize,
    pub failed: usize,
}

impl VerdictTally {
    pub fn from_reports(reports: &[RunReport]) -> Self {
        let mut tally = Self::default();
        for r in reports {
            match r.verdict {
                Verdict::Passed => tally.passed += 1,
                Verdict::Warning => tally.warning += 1,
                Verdict::Failed => tally.failed += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.passed + self.warning + self.failed
    }
}

/// Most severe verdict among `reports`, `None` when there are none.
pub fn worst_verdict(reports: &[RunReport]) -> Option<Verdict> {
    reports.iter().map(|r| r.verdict).max()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::model::summary::SummaryMetrics;
use crate::model::thresholds::ColorClass;
use crate::model::verdict::{Verdict, VerdictProfile};
use crate::pipeline::stage1_extract::run_stage1;

/// Stand-in for a missing metric. Below every limit the rules compare against.
const MISSING: f64 = -1.0;

/// Candidate metrics pulled from a summary, each independently absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub duration_postman: Option<f64>,
    pub p95_quick: Option<f64>,
    pub p95_script: Option<f64>,
    pub error_rate_postman: Option<f64>,
    pub error_rate_quick: Option<f64>,
    pub error_rate_script: Option<f64>,
    pub failures: Option<f64>,
    pub passes: Option<f64>,
    pub fail_rate_postman: Option<f64>,
}

impl DerivedMetrics {
    pub fn from_summary(m: &SummaryMetrics) -> Self {
        Self {
            duration_postman: m.postman.duration_ms,
            p95_quick: m.quick.p95_ms,
            p95_script: m.script.p95_ms,
            error_rate_postman: m.postman.error_rate,
            error_rate_quick: m.quick.error_rate(),
            error_rate_script: m.script.error_rate(),
            failures: m.postman.failures,
            passes: m.postman.passes,
            fail_rate_postman: m.postman.fail_rate(),
        }
    }

    fn error_rates(&self) -> [f64; 3] {
        [
            self.error_rate_postman.unwrap_or(MISSING),
            self.error_rate_quick.unwrap_or(MISSING),
            self.error_rate_script.unwrap_or(MISSING),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub color: ColorClass,
}

impl From<Verdict> for Evaluation {
    fn from(verdict: Verdict) -> Self {
        Self {
            verdict,
            color: verdict.color(),
        }
    }
}

pub fn is_failed(m: &DerivedMetrics, profile: &VerdictProfile) -> bool {
    let error_limit = profile.fail_error_rate_pct;
    m.error_rates().iter().any(|rate| *rate > error_limit)
        || m.fail_rate_postman.unwrap_or(MISSING) >= profile.fail_fail_rate_pct
}

pub fn is_warning(m: &DerivedMetrics, profile: &VerdictProfile) -> bool {
    let error_limit = profile.fail_error_rate_pct;
    let fail_rate = m.fail_rate_postman.unwrap_or(MISSING);
    m.duration_postman.unwrap_or(MISSING) > profile.warn_duration_ms
        || m.p95_quick.unwrap_or(MISSING) > profile.warn_p95_ms
        || m.p95_script.unwrap_or(MISSING) > profile.warn_p95_ms
        || m
            .error_rates()
            .iter()
            .any(|rate| *rate > 0.0 && *rate <= error_limit)
        || (fail_rate > 0.0 && fail_rate < profile.fail_fail_rate_pct)
}

/// Fail rules first, then warning rules; anything else passes.
pub fn classify_metrics(m: &DerivedMetrics, profile: &VerdictProfile) -> Verdict {
    if is_failed(m, profile) {
        Verdict::Failed
    } else if is_warning(m, profile) {
        Verdict::Warning
    } else {
        Verdict::Passed
    }
}

/// Verdict of already extracted metrics.
pub fn evaluate_derived(derived: &DerivedMetrics, profile: &VerdictProfile) -> Evaluation {
    let verdict = classify_metrics(derived, profile);
    debug!(verdict = verdict.label(), ?derived, "run evaluated");
    verdict.into()
}

pub fn evaluate_with(container: &Value, profile: &VerdictProfile) -> Evaluation {
    let stage1 = run_stage1(container);
    evaluate_derived(&DerivedMetrics::from_summary(&stage1.metrics), profile)
}

/// Verdict of a run container under the default profile.
pub fn evaluate(container: &Value) -> Evaluation {
    evaluate_with(container, &VerdictProfile::default_v1())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_verdict.rs"]
mod tests;

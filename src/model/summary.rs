use serde::Serialize;
use serde_json::Value;

/// Which execution engine produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubType {
    Postman,
    Quick,
    Script,
    Unknown,
}

impl SubType {
    pub fn name(self) -> &'static str {
        match self {
            SubType::Postman => "postman",
            SubType::Quick => "quick",
            SubType::Script => "script",
            SubType::Unknown => "unknown",
        }
    }
}

/// Where a summary may sit inside a run container, in probe order.
pub const SUMMARY_PROBES: &[&[&str]] = &[
    &["summary"],
    &["testRun", "summary"],
    &["testRun", "rawSummary"],
];

/// Walks `path` through nested objects. JSON `null` counts as absent.
pub fn field_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = value;
    for key in path {
        cur = cur.as_object()?.get(*key)?;
    }
    if cur.is_null() { None } else { Some(cur) }
}

/// Numeric field at `path`; anything that is not a finite JSON number is absent.
pub fn number_at(value: &Value, path: &[&str]) -> Option<f64> {
    field_at(value, path)?.as_f64().filter(|v| v.is_finite())
}

/// First summary found along [`SUMMARY_PROBES`], with the probe that matched.
pub fn locate_summary(container: &Value) -> Option<(&Value, &'static [&'static str])> {
    SUMMARY_PROBES
        .iter()
        .find_map(|probe| field_at(container, probe).map(|summary| (summary, *probe)))
}

/// Fields written by the collection runner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PostmanSummary {
    pub duration_ms: Option<f64>,
    pub error_rate: Option<f64>,
    pub failures: Option<f64>,
    pub passes: Option<f64>,
}

impl PostmanSummary {
    pub fn extract(summary: &Value) -> Self {
        Self {
            duration_ms: number_at(summary, &["duration_ms"]),
            error_rate: number_at(summary, &["error_rate", "value"]),
            failures: number_at(summary, &["failures"]),
            passes: number_at(summary, &["passes"]),
        }
    }

    pub fn is_present(&self) -> bool {
        self.duration_ms.is_some()
            || self.error_rate.is_some()
            || self.failures.is_some()
            || self.passes.is_some()
    }

    /// Percent of failed assertions; `None` unless both counts exist and sum above zero.
    pub fn fail_rate(&self) -> Option<f64> {
        let (failures, passes) = (self.failures?, self.passes?);
        let total = failures + passes;
        if total > 0.0 {
            Some(failures / total * 100.0)
        } else {
            None
        }
    }
}

/// Fields written by the ad-hoc runner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuickSummary {
    pub p95_ms: Option<f64>,
    pub requests: Option<f64>,
    pub failed_requests: Option<f64>,
}

impl QuickSummary {
    pub fn extract(summary: &Value) -> Self {
        Self {
            p95_ms: number_at(summary, &["http_req_duration_p95", "value"]),
            requests: number_at(summary, &["http_reqs", "value"]),
            failed_requests: number_at(summary, &["http_req_failed", "fails"]),
        }
    }

    pub fn is_present(&self) -> bool {
        self.p95_ms.is_some() || self.requests.is_some() || self.failed_requests.is_some()
    }

    /// Percent of failed requests; `None` without a positive request count.
    pub fn error_rate(&self) -> Option<f64> {
        let requests = self.requests.filter(|n| *n > 0.0)?;
        Some(self.failed_requests? / requests * 100.0)
    }
}

/// Fields written by the custom-script runner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScriptSummary {
    pub p95_ms: Option<f64>,
    pub failed_fraction: Option<f64>,
}

impl ScriptSummary {
    pub fn extract(summary: &Value) -> Self {
        Self {
            p95_ms: number_at(summary, &["metrics_overview", "http_req_duration", "p(95)"]),
            failed_fraction: number_at(summary, &["metrics_overview", "http_req_failed", "value"]),
        }
    }

    pub fn is_present(&self) -> bool {
        self.p95_ms.is_some() || self.failed_fraction.is_some()
    }

    /// Failed fraction as a percent. A fraction of exactly 0 reads as absent.
    pub fn error_rate(&self) -> Option<f64> {
        self.failed_fraction
            .filter(|v| *v != 0.0)
            .map(|v| v * 100.0)
    }
}

/// Union of the three engine views of one summary. Fields of the engines that
/// did not produce the summary are simply absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryMetrics {
    pub postman: PostmanSummary,
    pub quick: QuickSummary,
    pub script: ScriptSummary,
}

impl SummaryMetrics {
    pub fn extract(summary: &Value) -> Self {
        Self {
            postman: PostmanSummary::extract(summary),
            quick: QuickSummary::extract(summary),
            script: ScriptSummary::extract(summary),
        }
    }

    pub fn sub_type(&self) -> SubType {
        if self.postman.is_present() {
            SubType::Postman
        } else if self.quick.is_present() {
            SubType::Quick
        } else if self.script.is_present() {
            SubType::Script
        } else {
            SubType::Unknown
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/summary.rs"]
mod tests;

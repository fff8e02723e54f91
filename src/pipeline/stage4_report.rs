use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::input::InputError;
use crate::model::metrics::{FormattedMetric, MetricKind};
use crate::model::summary::SubType;
use crate::model::verdict::VerdictProfile;
use crate::pipeline::stage1_extract::run_stage1;
use crate::pipeline::stage2_format::{format, format_percent};
use crate::pipeline::stage3_verdict::{DerivedMetrics, evaluate_derived};
use crate::report::json::render_reports_json;
use crate::report::text::render_reports_text;
use crate::report::{DisplayMetric, RunReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Metrics shown for a run, chosen by the engine that produced it. Postman's
/// error rate is the raw source value; the other rates are derived percentages.
pub fn display_metrics(sub_type: SubType, derived: &DerivedMetrics) -> Vec<FormattedMetric> {
    match sub_type {
        SubType::Postman => vec![
            format(MetricKind::PostmanDuration, derived.duration_postman),
            format(MetricKind::ErrorRate, derived.error_rate_postman),
            format_percent(MetricKind::FailRate, derived.fail_rate_postman),
        ],
        SubType::Quick => vec![
            format(MetricKind::QuickP95, derived.p95_quick),
            format_percent(MetricKind::ErrorRate, derived.error_rate_quick),
        ],
        SubType::Script => vec![
            format(MetricKind::ScriptP95, derived.p95_script),
            format_percent(MetricKind::ErrorRate, derived.error_rate_script),
        ],
        SubType::Unknown => Vec::new(),
    }
}

/// Row label: the container's `id` or `name`, else its 1-based position.
pub fn row_label(container: &Value, index: usize) -> String {
    for key in ["id", "name"] {
        match container.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    format!("#{}", index + 1)
}

pub fn build_report(container: &Value, index: usize, profile: &VerdictProfile) -> RunReport {
    let stage1 = run_stage1(container);
    let sub_type = stage1.metrics.sub_type();
    let derived = DerivedMetrics::from_summary(&stage1.metrics);
    let eval = evaluate_derived(&derived, profile);
    RunReport {
        label: row_label(container, index),
        sub_type,
        verdict: eval.verdict,
        color: eval.color.token(),
        metrics: display_metrics(sub_type, &derived)
            .iter()
            .map(DisplayMetric::from)
            .collect(),
    }
}

pub fn build_reports(containers: &[Value], profile: &VerdictProfile) -> Vec<RunReport> {
    containers
        .iter()
        .enumerate()
        .map(|(i, c)| build_report(c, i, profile))
        .collect()
}

pub fn render(reports: &[RunReport], output: OutputFormat) -> Result<String, InputError> {
    match output {
        OutputFormat::Text => Ok(render_reports_text(reports)),
        OutputFormat::Json => Ok(render_reports_json(reports)?),
    }
}

pub fn write_rendered(rendered: &str, out: Option<&Path>) -> Result<(), InputError> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;

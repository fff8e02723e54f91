use std::fmt;

use serde::Serialize;

use crate::model::thresholds::{
    ColorClass, DURATION_BANDS, ERROR_RATE_BANDS, FAIL_RATE_BANDS, P95_BANDS,
};

/// Display-ready number: `value` is `None` when the source field was absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMetric {
    pub value: Option<f64>,
    pub suffix: &'static str,
}

impl fmt::Display for NormalizedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{:.2}{}", v, self.suffix),
            None => f.write_str("-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Milliseconds, switched to seconds from 1000 ms upward.
    Duration,
    /// Fraction in [0, 1] or an already scaled percentage.
    Percent,
}

/// The named formatter configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MetricKind {
    PostmanDuration,
    QuickP95,
    ScriptP95,
    ErrorRate,
    FailRate,
}

impl MetricKind {
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::PostmanDuration => "duration",
            MetricKind::QuickP95 | MetricKind::ScriptP95 => "p95",
            MetricKind::ErrorRate => "error_rate",
            MetricKind::FailRate => "fail_rate",
        }
    }

    pub fn transform(self) -> Transform {
        match self {
            MetricKind::PostmanDuration | MetricKind::QuickP95 | MetricKind::ScriptP95 => {
                Transform::Duration
            }
            MetricKind::ErrorRate | MetricKind::FailRate => Transform::Percent,
        }
    }

    /// Band name and color of a value in the table's unit: milliseconds for
    /// durations, percent for rates.
    pub fn band(self, raw: Option<f64>) -> Option<(&'static str, ColorClass)> {
        match self {
            MetricKind::PostmanDuration => DURATION_BANDS.classify(raw).map(|b| (b.name(), b.color())),
            MetricKind::QuickP95 | MetricKind::ScriptP95 => {
                P95_BANDS.classify(raw).map(|b| (b.name(), b.color()))
            }
            MetricKind::ErrorRate => ERROR_RATE_BANDS.classify(raw).map(|b| (b.name(), b.color())),
            MetricKind::FailRate => FAIL_RATE_BANDS.classify(raw).map(|b| (b.name(), b.color())),
        }
    }
}

/// Output of the metric formatter for one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedMetric {
    pub name: &'static str,
    #[serde(flatten)]
    pub normalized: NormalizedMetric,
    pub band: Option<&'static str>,
    pub color: Option<ColorClass>,
}

impl FormattedMetric {
    pub fn display(&self) -> String {
        self.normalized.to_string()
    }
}

//! Normalization, display formatting and pass/warning/fail verdicts for the
//! summaries produced by API and performance test runners.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::metrics::{FormattedMetric, MetricKind, NormalizedMetric};
pub use model::thresholds::{ColorClass, ThresholdTable};
pub use model::verdict::{Verdict, VerdictProfile};
pub use pipeline::stage2_format::{format, format_percent};
pub use pipeline::stage3_verdict::{Evaluation, evaluate, evaluate_with};

use serde_json::Value;
use tracing::trace;

use crate::model::summary::{SummaryMetrics, locate_summary};

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub metrics: SummaryMetrics,
    /// Probe path that located the summary, `None` when no probe matched.
    pub probe: Option<&'static [&'static str]>,
}

/// Locates the summary inside a run container and extracts every engine's
/// fields from it. A container without a summary behaves like an empty one.
pub fn run_stage1(container: &Value) -> Stage1Output {
    match locate_summary(container) {
        Some((summary, probe)) => {
            trace!(probe = %probe.join("."), "summary located");
            Stage1Output {
                metrics: SummaryMetrics::extract(summary),
                probe: Some(probe),
            }
        }
        None => {
            trace!("no summary at any probe path");
            Stage1Output {
                metrics: SummaryMetrics::default(),
                probe: None,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_extract.rs"]
mod tests;

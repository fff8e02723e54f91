use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::{InputError, read_document};
use crate::model::thresholds::ColorClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Verdict {
    Passed,
    Warning,
    Failed,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Passed => "Passed",
            Verdict::Warning => "Warning",
            Verdict::Failed => "Failed",
        }
    }

    pub fn color(self) -> ColorClass {
        match self {
            Verdict::Passed => ColorClass::Success,
            Verdict::Warning => ColorClass::Warning,
            Verdict::Failed => ColorClass::Danger,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Limits used by the verdict rules. Rates are percentages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerdictProfile {
    pub fail_error_rate_pct: f64,
    pub fail_fail_rate_pct: f64,
    pub warn_duration_ms: f64,
    pub warn_p95_ms: f64,
}

impl VerdictProfile {
    pub fn default_v1() -> Self {
        Self {
            fail_error_rate_pct: 5.0,
            fail_fail_rate_pct: 20.0,
            warn_duration_ms: 3_000.0,
            warn_p95_ms: 200.0,
        }
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        let value = read_document(path)?;
        let profile: VerdictProfile = serde_json::from_value(value)?;
        Ok(profile)
    }
}

impl Default for VerdictProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

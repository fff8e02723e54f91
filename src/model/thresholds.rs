use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

/// Ordered `(upper_bound, category)` pairs, ascending by bound.
///
/// A value falls into the first entry whose bound is `>=` the value. The last
/// entry is the catch-all, conventionally with an infinite bound.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<T: 'static> {
    entries: &'static [(f64, T)],
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold table is empty")]
    Empty,
    #[error("threshold bounds must be strictly increasing (entry {index}: {bound} after {previous})")]
    NotIncreasing {
        index: usize,
        previous: f64,
        bound: f64,
    },
}

impl<T: Copy + 'static> ThresholdTable<T> {
    /// Builds a table without validation. Only for tables whose bounds are
    /// known at compile time; they are checked by the unit tests instead.
    pub const fn from_static(entries: &'static [(f64, T)]) -> Self {
        Self { entries }
    }

    pub fn new(entries: &'static [(f64, T)]) -> Result<Self, ThresholdError> {
        if entries.is_empty() {
            return Err(ThresholdError::Empty);
        }
        for (index, pair) in entries.windows(2).enumerate() {
            let (previous, bound) = (pair[0].0, pair[1].0);
            if bound.partial_cmp(&previous) != Some(Ordering::Greater) {
                return Err(ThresholdError::NotIncreasing {
                    index: index + 1,
                    previous,
                    bound,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Position of the entry `value` falls into.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = self
            .entries
            .iter()
            .position(|(bound, _)| value <= *bound)
            .unwrap_or(self.entries.len() - 1);
        Some(idx)
    }

    /// `None` in, `None` out: a missing value has no category.
    pub fn classify(&self, value: Option<f64>) -> Option<T> {
        let idx = self.index_of(value?)?;
        Some(self.entries[idx].1)
    }
}

/// Style token handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorClass {
    Success,
    Info,
    Warning,
    Danger,
}

impl ColorClass {
    pub fn token(self) -> &'static str {
        match self {
            ColorClass::Success => "success",
            ColorClass::Info => "info",
            ColorClass::Warning => "warning",
            ColorClass::Danger => "danger",
        }
    }
}

/// Empty string for "no data".
pub fn color_token(color: Option<ColorClass>) -> &'static str {
    color.map(ColorClass::token).unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyBand {
    Excellent,
    Fair,
    Slow,
    Poor,
}

impl LatencyBand {
    pub fn name(self) -> &'static str {
        match self {
            LatencyBand::Excellent => "excellent",
            LatencyBand::Fair => "fair",
            LatencyBand::Slow => "slow",
            LatencyBand::Poor => "poor",
        }
    }

    pub fn color(self) -> ColorClass {
        match self {
            LatencyBand::Excellent => ColorClass::Success,
            LatencyBand::Fair => ColorClass::Info,
            LatencyBand::Slow => ColorClass::Warning,
            LatencyBand::Poor => ColorClass::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    Clean,
    Low,
    Elevated,
    Critical,
}

impl RateBand {
    pub fn name(self) -> &'static str {
        match self {
            RateBand::Clean => "clean",
            RateBand::Low => "low",
            RateBand::Elevated => "elevated",
            RateBand::Critical => "critical",
        }
    }

    pub fn color(self) -> ColorClass {
        match self {
            RateBand::Clean => ColorClass::Success,
            RateBand::Low => ColorClass::Info,
            RateBand::Elevated => ColorClass::Warning,
            RateBand::Critical => ColorClass::Danger,
        }
    }
}

/// Whole-run duration in milliseconds.
pub const DURATION_BANDS: ThresholdTable<LatencyBand> = ThresholdTable::from_static(&[
    (3_000.0, LatencyBand::Excellent),
    (10_000.0, LatencyBand::Fair),
    (30_000.0, LatencyBand::Slow),
    (f64::INFINITY, LatencyBand::Poor),
]);

/// 95th percentile request latency in milliseconds.
pub const P95_BANDS: ThresholdTable<LatencyBand> = ThresholdTable::from_static(&[
    (200.0, LatencyBand::Excellent),
    (500.0, LatencyBand::Fair),
    (1_000.0, LatencyBand::Slow),
    (f64::INFINITY, LatencyBand::Poor),
]);

/// Percent of failed requests.
pub const ERROR_RATE_BANDS: ThresholdTable<RateBand> = ThresholdTable::from_static(&[
    (0.0, RateBand::Clean),
    (1.0, RateBand::Low),
    (5.0, RateBand::Elevated),
    (f64::INFINITY, RateBand::Critical),
]);

/// Percent of failed assertions. 20 % itself fails the run, so it is critical.
pub const FAIL_RATE_BANDS: ThresholdTable<RateBand> = ThresholdTable::from_static(&[
    (0.0, RateBand::Clean),
    (5.0, RateBand::Low),
    (19.999_999_999, RateBand::Elevated),
    (f64::INFINITY, RateBand::Critical),
]);

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;

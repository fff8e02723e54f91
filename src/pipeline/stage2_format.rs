use crate::model::metrics::{FormattedMetric, MetricKind, NormalizedMetric, Transform};

pub const SUFFIX_MS: &str = " ms";
pub const SUFFIX_S: &str = " s";
pub const SUFFIX_PCT: &str = " %";

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Milliseconds below one second stay in ms, anything longer is shown in seconds.
pub fn duration_transform(ms: Option<f64>) -> NormalizedMetric {
    match ms {
        Some(ms) if ms >= 1_000.0 => NormalizedMetric {
            value: Some(round2(ms / 1_000.0)),
            suffix: SUFFIX_S,
        },
        Some(ms) => NormalizedMetric {
            value: Some(round2(ms)),
            suffix: SUFFIX_MS,
        },
        None => NormalizedMetric {
            value: None,
            suffix: SUFFIX_MS,
        },
    }
}

/// Scales a value to percent. Values `<= 1` are read as fractions.
pub fn to_percent(v: f64) -> f64 {
    if v <= 1.0 { v * 100.0 } else { v }
}

pub fn percent_transform(value: Option<f64>) -> NormalizedMetric {
    NormalizedMetric {
        value: value.map(|v| round2(to_percent(v))),
        suffix: SUFFIX_PCT,
    }
}

/// Normalizes `raw` for display and picks its color band.
///
/// Durations are banded on the original milliseconds, never on the converted
/// display value. Rates are banded on the unrounded percentage.
pub fn format(kind: MetricKind, raw: Option<f64>) -> FormattedMetric {
    match kind.transform() {
        Transform::Duration => finish(kind, duration_transform(raw), raw),
        Transform::Percent => finish(kind, percent_transform(raw), raw.map(to_percent)),
    }
}

/// Like [`format`] for a rate that is already a percentage, so values below 1
/// are not scaled again.
pub fn format_percent(kind: MetricKind, pct: Option<f64>) -> FormattedMetric {
    match kind.transform() {
        Transform::Duration => format(kind, pct),
        Transform::Percent => {
            let normalized = NormalizedMetric {
                value: pct.map(round2),
                suffix: SUFFIX_PCT,
            };
            finish(kind, normalized, pct)
        }
    }
}

fn finish(kind: MetricKind, normalized: NormalizedMetric, band_input: Option<f64>) -> FormattedMetric {
    let band = kind.band(band_input);
    FormattedMetric {
        name: kind.name(),
        normalized,
        band: band.map(|(name, _)| name),
        color: band.map(|(_, color)| color),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_format.rs"]
mod tests;

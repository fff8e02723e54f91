use crate::report::{RunReport, VerdictTally};

pub fn render_reports_text(reports: &[RunReport]) -> String {
    let mut out = String::new();

    for r in reports {
        out.push_str(&format!(
            "{:<24} {:<8} {:<8}",
            r.label,
            r.sub_type.name(),
            r.verdict.label()
        ));
        for m in &r.metrics {
            out.push_str(&format!("  {}={}", m.name, m.display));
            if let Some(band) = m.band {
                out.push_str(&format!(" ({band})"));
            }
        }
        out.push('\n');
    }

    let tally = VerdictTally::from_reports(reports);
    out.push_str(&format!(
        "\nruns={} passed={} warning={} failed={}\n",
        tally.total(),
        tally.passed,
        tally.warning,
        tally.failed
    ));
    out
}

use serde::Serialize;

use crate::report::{RunReport, VerdictTally};

#[derive(Serialize)]
struct JsonDocument<'a> {
    tool: &'static str,
    version: &'static str,
    tally: VerdictTally,
    runs: &'a [RunReport],
}

pub fn render_reports_json(reports: &[RunReport]) -> Result<String, serde_json::Error> {
    let doc = JsonDocument {
        tool: "runverdict",
        version: env!("CARGO_PKG_VERSION"),
        tally: VerdictTally::from_reports(reports),
        runs: reports,
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

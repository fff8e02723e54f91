use serde_json::json;

use super::*;
use crate::model::verdict::VerdictProfile;
use crate::pipeline::stage4_report::build_reports;

#[test]
fn test_tally_and_worst() {
    let reports = build_reports(
        &[
            json!({"summary": {"duration_ms": 10}}),
            json!({"summary": {"duration_ms": 4000}}),
            json!({"summary": {"duration_ms": 5000}}),
        ],
        &VerdictProfile::default_v1(),
    );
    let tally = VerdictTally::from_reports(&reports);
    assert_eq!(tally, VerdictTally { passed: 1, warning: 2, failed: 0 });
    assert_eq!(tally.total(), 3);
    assert_eq!(worst_verdict(&reports), Some(Verdict::Warning));
    assert_eq!(worst_verdict(&[]), None);
}

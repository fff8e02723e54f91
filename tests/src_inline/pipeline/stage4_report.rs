use serde_json::json;

use super::*;
use crate::model::verdict::Verdict;

#[test]
fn test_row_label() {
    assert_eq!(row_label(&json!({"id": "run-7"}), 0), "run-7");
    assert_eq!(row_label(&json!({"id": 42}), 0), "42");
    assert_eq!(row_label(&json!({"id": "", "name": "smoke"}), 0), "smoke");
    assert_eq!(row_label(&json!({}), 2), "#3");
}

#[test]
fn test_postman_report_metrics() {
    let c = json!({"id": "p1", "summary": {
        "duration_ms": 3500,
        "error_rate": {"value": 0.01},
        "failures": 1,
        "passes": 19
    }});
    let r = build_report(&c, 0, &VerdictProfile::default_v1());
    assert_eq!(r.label, "p1");
    assert_eq!(r.sub_type, SubType::Postman);
    assert_eq!(r.verdict, Verdict::Warning);
    assert_eq!(r.color, "warning");
    let names: Vec<_> = r.metrics.iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["duration", "error_rate", "fail_rate"]);
    assert_eq!(r.metrics[0].display, "3.50 s");
    assert_eq!(r.metrics[0].band, Some("fair"));
    assert_eq!(r.metrics[1].display, "1.00 %");
    assert_eq!(r.metrics[2].display, "5.00 %");
}

#[test]
fn test_quick_report_metrics() {
    let c = json!({"testRun": {"summary": {
        "http_req_duration_p95": {"value": 120},
        "http_reqs": {"value": 200},
        "http_req_failed": {"fails": 0}
    }}});
    let r = build_report(&c, 4, &VerdictProfile::default_v1());
    assert_eq!(r.label, "#5");
    assert_eq!(r.sub_type, SubType::Quick);
    assert_eq!(r.verdict, Verdict::Passed);
    assert_eq!(r.metrics.len(), 2);
    assert_eq!(r.metrics[0].display, "120.00 ms");
    assert_eq!(r.metrics[1].display, "0.00 %");
    assert_eq!(r.metrics[1].color, "success");
}

#[test]
fn test_script_report_with_zero_fraction_shows_no_data() {
    let c = json!({"summary": {"metrics_overview": {
        "http_req_duration": {"p(95)": 80},
        "http_req_failed": {"value": 0}
    }}});
    let r = build_report(&c, 0, &VerdictProfile::default_v1());
    assert_eq!(r.sub_type, SubType::Script);
    assert_eq!(r.metrics[1].value, None);
    assert_eq!(r.metrics[1].color, "");
    assert_eq!(r.metrics[1].display, "-");
}

fn rate_metric(r: &RunReport, name: &str) -> DisplayMetric {
    r.metrics.iter().find(|m| m.name == name).cloned().unwrap()
}

#[test]
fn test_sub_percent_rates_match_verdict() {
    let profile = VerdictProfile::default_v1();

    let quick = build_report(
        &json!({"summary": {"http_reqs": {"value": 200}, "http_req_failed": {"fails": 1}}}),
        0,
        &profile,
    );
    let script = build_report(
        &json!({"summary": {"metrics_overview": {"http_req_failed": {"value": 0.005}}}}),
        0,
        &profile,
    );
    let postman = build_report(&json!({"summary": {"failures": 1, "passes": 199}}), 0, &profile);

    for (r, name) in [(&quick, "error_rate"), (&script, "error_rate"), (&postman, "fail_rate")] {
        assert_eq!(r.verdict, Verdict::Warning);
        let m = rate_metric(r, name);
        assert_eq!(m.value, Some(0.5));
        assert_eq!(m.display, "0.50 %");
        assert_eq!(m.band, Some("low"));
        assert_eq!(m.color, "info");
    }
}

#[test]
fn test_failing_fail_rate_is_danger() {
    let r = build_report(
        &json!({"summary": {"failures": 2, "passes": 8}}),
        0,
        &VerdictProfile::default_v1(),
    );
    assert_eq!(r.verdict, Verdict::Failed);
    let m = rate_metric(&r, "fail_rate");
    assert_eq!(m.display, "20.00 %");
    assert_eq!(m.color, "danger");
}

#[test]
fn test_unknown_report_has_no_metrics() {
    let reports = build_reports(&[json!({}), json!({"summary": {"duration_ms": 9000}})], &VerdictProfile::default_v1());
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].sub_type, SubType::Unknown);
    assert!(reports[0].metrics.is_empty());
    assert_eq!(reports[0].verdict, Verdict::Passed);
    assert_eq!(reports[1].verdict, Verdict::Warning);
}

#[test]
fn test_render_text_and_json() {
    let reports = build_reports(
        &[
            json!({"id": "a", "summary": {"duration_ms": 100}}),
            json!({"id": "b", "summary": {"error_rate": {"value": 9}}}),
        ],
        &VerdictProfile::default_v1(),
    );
    let text = render(&reports, OutputFormat::Text).unwrap();
    assert!(text.contains("Passed"));
    assert!(text.contains("Failed"));
    assert!(text.contains("duration=100.00 ms (excellent)"));
    assert!(text.ends_with("runs=2 passed=1 warning=0 failed=1\n"));

    let json_out = render(&reports, OutputFormat::Json).unwrap();
    let parsed: Value = serde_json::from_str(&json_out).unwrap();
    assert_eq!(parsed["tool"], "runverdict");
    assert_eq!(parsed["tally"]["failed"], 1);
    assert_eq!(parsed["runs"][1]["verdict"], "Failed");
    assert_eq!(parsed["runs"][1]["color"], "danger");
    assert_eq!(parsed["runs"][0]["sub_type"], "postman");
}

#[test]
fn test_write_rendered_to_file() {
    let mut path = std::env::temp_dir();
    path.push(format!("runverdict_report_test_{}", std::process::id()));
    path.push("report.txt");
    write_rendered("hello\n", Some(&path)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
}

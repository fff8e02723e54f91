use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::json;

use super::*;
use crate::model::verdict::VerdictProfile;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("runverdict_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_load_single_run() {
    let dir = make_temp_dir();
    let path = dir.join("run.json");
    fs::write(&path, r#"{"summary": {"duration_ms": 1000}}"#).unwrap();
    let runs = load_runs(&path).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0]["summary"]["duration_ms"], 1000);
}

#[test]
fn test_load_array_gz() {
    let dir = make_temp_dir();
    let path = dir.join("runs.json.gz");
    write_gz(
        &path,
        r#"[{"id": "a", "summary": {}}, {"id": "b", "testRun": {"rawSummary": {"passes": 3}}}]"#,
    );
    let runs = load_runs(&path).unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[1]["id"], "b");
}

#[test]
fn test_rejects_bad_documents() {
    assert!(matches!(
        containers_from_document(json!(5)),
        Err(InputError::InvalidInput(_))
    ));
    assert!(matches!(
        containers_from_document(json!([{}, "x"])),
        Err(InputError::InvalidInput(msg)) if msg.contains("#2")
    ));

    let dir = make_temp_dir();
    let empty = dir.join("empty.json");
    fs::write(&empty, "  \n").unwrap();
    assert!(matches!(read_document(&empty), Err(InputError::InvalidInput(_))));

    let broken = dir.join("broken.json");
    fs::write(&broken, "{not json").unwrap();
    assert!(matches!(read_document(&broken), Err(InputError::Json(_))));

    assert!(matches!(
        read_document(&dir.join("missing.json")),
        Err(InputError::Io(_))
    ));
}

#[test]
fn test_profile_load_partial_override() {
    let dir = make_temp_dir();
    let path = dir.join("profile.json");
    fs::write(&path, r#"{"warn_p95_ms": 500}"#).unwrap();
    let profile = VerdictProfile::load(&path).unwrap();
    assert_eq!(profile.warn_p95_ms, 500.0);
    assert_eq!(profile.warn_duration_ms, 3000.0);
    assert_eq!(profile.fail_error_rate_pct, 5.0);

    let bad = dir.join("bad.json");
    fs::write(&bad, r#"{"warn_p99_ms": 500}"#).unwrap();
    assert!(matches!(VerdictProfile::load(&bad), Err(InputError::Json(_))));
}

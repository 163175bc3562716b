use std::path::PathBuf;

use assert_cmd::Command;
use drop_targets::RefreshReport;
use predicates::prelude::*;

fn snapshot_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join("snapshot.json")
}

fn cli() -> Command {
    Command::cargo_bin("drop-targets").expect("binary built")
}

#[test]
fn refresh_prints_report_json_to_stdout() {
    let output = cli()
        .arg("refresh")
        .arg(snapshot_path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: RefreshReport = serde_json::from_slice(&output).expect("report JSON");
    assert_eq!(report.clusters.len(), 3);
    assert_eq!(
        report.active_target.map(|t| t.class_label),
        Some("umbrella".to_string())
    );
    assert!(report.prediction.is_available());
}

#[test]
fn refresh_writes_report_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("report.json");

    cli()
        .arg("refresh")
        .arg(snapshot_path())
        .arg("--output")
        .arg(&out)
        .arg("--hide-completed")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote report JSON"))
        .stdout(predicate::str::contains("2 cluster(s)"))
        .stdout(predicate::str::contains("release in"));

    let report = RefreshReport::load_json(&out).expect("load report");
    assert!(report.clusters.iter().all(|c| c.class_label != "bus"));
}

#[test]
fn refresh_rejects_negative_release_distance() {
    cli()
        .arg("refresh")
        .arg(snapshot_path())
        .args(["--release-distance", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidReleaseDistance"));
}

#[test]
fn refresh_reports_missing_snapshot() {
    cli()
        .arg("refresh")
        .arg("does/not/exist.json")
        .assert()
        .failure();
}

#[test]
fn distance_handles_negative_longitudes() {
    cli()
        .args(["distance", "50.0", "-114.0", "51.0", "-114.0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("111194.9"));
}

#[test]
fn log_level_controls_stderr_records() {
    cli()
        .env_remove("RUST_LOG")
        .arg("refresh")
        .arg(snapshot_path())
        .assert()
        .success()
        .stderr(predicate::str::contains("car: dropped 1 detection(s)"))
        .stderr(predicate::str::contains("refresh:").not());

    cli()
        .env_remove("RUST_LOG")
        .args(["--log-level", "info", "refresh"])
        .arg(snapshot_path())
        .assert()
        .success()
        .stderr(predicate::str::contains("refresh: 3 cluster(s), target umbrella"));

    cli()
        .env_remove("RUST_LOG")
        .args(["--log-level", "off", "refresh"])
        .arg(snapshot_path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

//! Harness and Report Integration Tests
//!
//! Verifies the path the `--all --report` invocation takes: catalog run,
//! report totals, and the JSON file on disk.

use harmony_cli::{run_exercise, ExerciseOutcome, ExerciseReport};

fn full_run() -> ExerciseReport {
    let outcomes: Vec<_> = exercises::catalog()
        .iter()
        .map(|e| (e.name.to_string(), run_exercise(e)))
        .collect();
    ExerciseReport::from_outcomes(&outcomes)
}

#[test]
fn test_full_run_reports_all_passed() {
    let report = full_run();
    assert_eq!(report.total, exercises::catalog().len());
    assert_eq!(report.failed, 0);
    assert_eq!(report.passed, report.total);
    assert_eq!(report.pass_rate(), 1.0);
}

#[test]
fn test_summary_of_a_clean_run() {
    let report = full_run();
    let total = exercises::catalog().len();
    assert_eq!(
        report.summary(),
        format!("{} passed, 0 failed, {} total (100.0%)", total, total)
    );
}

#[test]
fn test_report_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    let report = full_run();
    report.save(&path).unwrap();

    let back: ExerciseReport =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_injected_failure_shows_up_in_the_report() {
    let mut outcomes: Vec<_> = exercises::catalog()
        .iter()
        .map(|e| (e.name.to_string(), run_exercise(e)))
        .collect();
    outcomes.push((
        "broken".to_string(),
        ExerciseOutcome::Fail("line 1: expected \"x\", got \"y\"".to_string()),
    ));

    let report = ExerciseReport::from_outcomes(&outcomes);
    assert_eq!(report.failed, 1);
    assert_eq!(report.failures[0].name, "broken");
    assert!(report.pass_rate() < 1.0);
}

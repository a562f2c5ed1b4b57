//! Contract tests for the harmony_cli component
//!
//! These tests verify the harness and report surface the binary is built
//! on: catalog verification, failure reporting, and the JSON report file.

use harmony_cli::{run_exercise, ExerciseOutcome, ExerciseReport};

mod harness_contract {
    use super::*;

    #[test]
    fn run_exercise_returns_pass_for_every_catalog_entry() {
        for exercise in exercises::catalog() {
            assert_eq!(
                run_exercise(exercise),
                ExerciseOutcome::Pass,
                "'{}' failed",
                exercise.name
            );
        }
    }

    #[test]
    fn outcome_is_pass_predicate() {
        assert!(ExerciseOutcome::Pass.is_pass());
        assert!(!ExerciseOutcome::Fail("line 1".to_string()).is_pass());
    }
}

mod report_contract {
    use super::*;

    #[test]
    fn clean_catalog_run_reports_full_pass_rate() {
        let outcomes: Vec<_> = exercises::catalog()
            .iter()
            .map(|e| (e.name.to_string(), run_exercise(e)))
            .collect();
        let report = ExerciseReport::from_outcomes(&outcomes);
        assert_eq!(report.total, exercises::catalog().len());
        assert_eq!(report.failed, 0);
        assert_eq!(report.pass_rate(), 1.0);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn report_serializes_with_named_fields() {
        let report = ExerciseReport::from_outcomes(&[(
            "swap".to_string(),
            ExerciseOutcome::Pass,
        )]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total\":1"));
        assert!(json.contains("\"passed\":1"));
        assert!(json.contains("\"failures\":[]"));
    }

    #[test]
    fn save_writes_json_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harmony.json");
        let report = ExerciseReport::from_outcomes(&[(
            "swap".to_string(),
            ExerciseOutcome::Pass,
        )]);
        report.save(&path).unwrap();
        assert!(path.exists());
        let back: ExerciseReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, report);
    }
}

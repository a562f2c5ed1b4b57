//! Contract tests for the exercises component
//!
//! These tests verify the public surface the harness and CLI rely on:
//! the catalog shape, transcript determinism, and the worked examples
//! each exercise hard-codes.

use es_values::Console;
use exercises::{catalog, find, square_list, Exercise};

mod registry_contract {
    use super::*;

    #[test]
    fn catalog_returns_static_exercises() {
        let exercises: &'static [Exercise] = catalog();
        assert!(exercises.len() >= 19);
    }

    #[test]
    fn find_is_consistent_with_catalog() {
        for exercise in catalog() {
            let found = find(exercise.name).expect("catalog entry must be findable");
            assert_eq!(found.name, exercise.name);
        }
    }

    #[test]
    fn every_transcript_matches_its_expected_lines() {
        for exercise in catalog() {
            let console = Console::captured();
            (exercise.run)(&console);
            assert_eq!(
                console.transcript(),
                exercise.expected,
                "'{}' diverged from its expected transcript",
                exercise.name
            );
        }
    }
}

mod worked_examples_contract {
    use super::*;

    #[test]
    fn square_list_worked_example() {
        assert_eq!(
            square_list(&[4.0, 5.6, -9.8, 3.14, 42.0, 6.0, 8.34]),
            vec![16.0, 1764.0, 36.0]
        );
    }

    #[test]
    fn exercises_leave_no_shared_state_behind() {
        // Running the whole catalog twice must be indistinguishable from
        // running it once: nothing persists across exercises.
        let collect = || {
            catalog()
                .iter()
                .map(|exercise| {
                    let console = Console::captured();
                    (exercise.run)(&console);
                    console.transcript()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(collect(), collect());
    }
}

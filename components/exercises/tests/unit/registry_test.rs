//! Catalog behavior tests.

use es_values::Console;
use exercises::{catalog, find};

#[test]
fn catalog_is_non_empty_and_ordered() {
    let exercises = catalog();
    assert!(!exercises.is_empty());
    // First and last entries anchor the fixed order the CLI lists.
    assert_eq!(exercises[0].name, "check-scope");
    assert_eq!(exercises[exercises.len() - 1].name, "module-graph");
}

#[test]
fn every_exercise_has_a_summary_and_expected_lines() {
    for exercise in catalog() {
        assert!(!exercise.summary.is_empty(), "{} has no summary", exercise.name);
        assert!(
            !exercise.expected.is_empty(),
            "{} has no expected transcript",
            exercise.name
        );
    }
}

#[test]
fn find_returns_the_named_exercise() {
    let exercise = find("thermostat").unwrap();
    assert_eq!(exercise.name, "thermostat");
}

#[test]
fn running_an_exercise_twice_gives_the_same_transcript() {
    let exercise = find("freeze-profile").unwrap();
    let first = Console::captured();
    let second = Console::captured();
    (exercise.run)(&first);
    (exercise.run)(&second);
    assert_eq!(first.transcript(), second.transcript());
}

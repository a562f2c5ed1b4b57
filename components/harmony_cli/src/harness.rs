//! The exercise harness: run a demonstration, verify its transcript.

use es_values::Console;
use exercises::Exercise;

/// The result of verifying one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseOutcome {
    /// Transcript matched the expected lines exactly
    Pass,
    /// Transcript diverged; the reason names the first diverging line
    Fail(String),
}

impl ExerciseOutcome {
    /// Whether the exercise passed.
    pub fn is_pass(&self) -> bool {
        matches!(self, ExerciseOutcome::Pass)
    }
}

/// Compare a transcript to expected lines, reporting the first divergence.
fn verify(actual: &[String], expected: &[&str]) -> ExerciseOutcome {
    let lines = actual.len().max(expected.len());
    for index in 0..lines {
        let got = actual.get(index).map(String::as_str);
        let want = expected.get(index).copied();
        if got != want {
            return ExerciseOutcome::Fail(format!(
                "line {}: expected {}, got {}",
                index + 1,
                want.map_or("end of transcript".to_string(), |l| format!("{:?}", l)),
                got.map_or("end of transcript".to_string(), |l| format!("{:?}", l)),
            ));
        }
    }
    ExerciseOutcome::Pass
}

/// Run an exercise against a capture console and verify its transcript.
pub fn run_exercise(exercise: &Exercise) -> ExerciseOutcome {
    let console = Console::captured();
    (exercise.run)(&console);
    verify(&console.transcript(), exercise.expected)
}

/// Run an exercise against stdout, then verify the recorded transcript.
///
/// Used by `--run` and the interactive prompt, where the transcript
/// should be visible as it happens.
pub fn run_exercise_printed(exercise: &Exercise) -> ExerciseOutcome {
    let console = Console::new();
    (exercise.run)(&console);
    verify(&console.transcript(), exercise.expected)
}

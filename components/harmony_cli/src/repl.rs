//! Interactive prompt for browsing and running exercises.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{CliError, CliResult};
use crate::harness::{run_exercise_printed, ExerciseOutcome};
use exercises::{catalog, find};

fn print_catalog() {
    for exercise in catalog() {
        println!("  {:<18} {}", exercise.name, exercise.summary);
    }
}

fn print_help() {
    println!("Type an exercise name to run it.");
    println!("  .list    show the exercise catalog");
    println!("  .help    show this help");
    println!("  exit     quit");
}

/// Run the interactive loop.
///
/// # Returns
/// `Ok(())` when the prompt exits normally
pub fn run_repl() -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Readline(format!("failed to initialize editor: {}", e)))?;

    println!("Harmony exercise runner");
    println!("Type an exercise name, '.list' for the catalog, 'exit' to quit.");
    println!();

    loop {
        match editor.readline("harmony> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);

                match trimmed {
                    "exit" | ".exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    ".list" => print_catalog(),
                    ".help" => print_help(),
                    name => match find(name) {
                        Some(exercise) => match run_exercise_printed(exercise) {
                            ExerciseOutcome::Pass => println!("pass"),
                            ExerciseOutcome::Fail(reason) => println!("FAIL: {}", reason),
                        },
                        None => println!("Unknown exercise '{}'. Try '.list'.", name),
                    },
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => return Err(CliError::Readline(e.to_string())),
        }
    }

    Ok(())
}

//! Harmony exercise runner CLI
//!
//! Entry point for the exercise runner. Parses CLI arguments and runs,
//! lists or verifies exercises from the catalog.

use clap::Parser as ClapParser;
use harmony_cli::{
    repl, run_exercise, run_exercise_printed, Cli, CliError, CliResult, ExerciseOutcome,
    ExerciseReport,
};

fn run(cli: Cli) -> CliResult<()> {
    if cli.list {
        for exercise in exercises::catalog() {
            println!("{:<18} {}", exercise.name, exercise.summary);
        }
    } else if let Some(name) = cli.run {
        let exercise =
            exercises::find(&name).ok_or_else(|| CliError::UnknownExercise(name.clone()))?;
        match run_exercise_printed(exercise) {
            ExerciseOutcome::Pass => println!("pass"),
            ExerciseOutcome::Fail(reason) => {
                return Err(CliError::TranscriptMismatch { name, reason });
            }
        }
    } else if cli.all {
        let mut outcomes = Vec::new();
        for exercise in exercises::catalog() {
            let outcome = run_exercise(exercise);
            match &outcome {
                ExerciseOutcome::Pass => println!("pass  {}", exercise.name),
                ExerciseOutcome::Fail(reason) => {
                    println!("FAIL  {}: {}", exercise.name, reason)
                }
            }
            outcomes.push((exercise.name.to_string(), outcome));
        }

        let report = ExerciseReport::from_outcomes(&outcomes);
        println!();
        println!("{}", report.summary());
        if let Some(path) = cli.report {
            report.save(&path)?;
            println!("Report written to {}", path.display());
        }
        if report.failed > 0 {
            if let Some(first) = report.failures.first() {
                return Err(CliError::TranscriptMismatch {
                    name: first.name.clone(),
                    reason: first.reason.clone(),
                });
            }
        }
    } else if cli.interactive {
        repl::run_repl()?;
    } else {
        // Default: show usage
        println!("Harmony exercise runner v0.1.0");
        println!();
        println!("Usage:");
        println!("  harmony --list               List exercises");
        println!("  harmony --run <NAME>         Run one exercise and verify it");
        println!("  harmony --all                Run and verify every exercise");
        println!("  harmony --all --report <F>   Also write the report as JSON");
        println!("  harmony --interactive        Start the interactive prompt");
        println!();
        println!("Run 'harmony --help' for more options.");
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

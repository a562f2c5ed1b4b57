//! Harmony exercise runner library
//!
//! Provides the harness, report and prompt behind the `harmony` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod harness;
pub mod repl;
pub mod report;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use harness::{run_exercise, run_exercise_printed, ExerciseOutcome};
pub use report::{ExerciseReport, FailureEntry};

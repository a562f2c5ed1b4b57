//! Run reports: totals, failures and the optional JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CliResult;
use crate::harness::ExerciseOutcome;

/// One failed exercise in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Exercise name
    pub name: String,
    /// First diverging transcript line
    pub reason: String,
}

/// Totals for one run over the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseReport {
    /// Exercises run
    pub total: usize,
    /// Exercises whose transcript matched
    pub passed: usize,
    /// Exercises whose transcript diverged
    pub failed: usize,
    /// The failures, in catalog order
    pub failures: Vec<FailureEntry>,
}

impl ExerciseReport {
    /// Build a report from named outcomes in catalog order.
    pub fn from_outcomes(outcomes: &[(String, ExerciseOutcome)]) -> Self {
        let failures: Vec<FailureEntry> = outcomes
            .iter()
            .filter_map(|(name, outcome)| match outcome {
                ExerciseOutcome::Pass => None,
                ExerciseOutcome::Fail(reason) => Some(FailureEntry {
                    name: name.clone(),
                    reason: reason.clone(),
                }),
            })
            .collect();
        ExerciseReport {
            total: outcomes.len(),
            passed: outcomes.len() - failures.len(),
            failed: failures.len(),
            failures,
        }
    }

    /// Fraction of exercises that passed, 1.0 for an empty run.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.passed as f64 / self.total as f64
    }

    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} total ({:.1}%)",
            self.passed,
            self.failed,
            self.total,
            self.pass_rate() * 100.0
        )
    }

    /// Write the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Serialization and file I/O errors surface as [`CliError`](crate::CliError).
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

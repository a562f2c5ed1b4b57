//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Runner for the ES2015 language-feature exercises.
#[derive(Parser, Debug)]
#[command(name = "harmony", version, about = "ES2015 language-feature exercise runner")]
pub struct Cli {
    /// List exercise names and summaries
    #[arg(long)]
    pub list: bool,

    /// Run one exercise and verify its transcript
    #[arg(long, value_name = "NAME")]
    pub run: Option<String>,

    /// Run and verify every exercise
    #[arg(long)]
    pub all: bool,

    /// With --all, also write the report as JSON
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Start the interactive prompt
    #[arg(long)]
    pub interactive: bool,
}

//! Console output for the exercises.
//!
//! Every exercise prints a hard-coded expected result, so the console
//! records everything it writes. The harness runs an exercise against a
//! silent console and compares the recorded transcript with the expected
//! lines.

use std::cell::RefCell;

use crate::value::EsValue;

/// Console output writer trait.
pub trait ConsoleWriter {
    /// Write one line of console output.
    fn write(&self, line: &str);
}

/// Default writer that prints to stdout.
struct StdoutWriter;

impl ConsoleWriter for StdoutWriter {
    fn write(&self, line: &str) {
        println!("{}", line);
    }
}

/// Writer that discards output; the transcript still records it.
struct SilentWriter;

impl ConsoleWriter for SilentWriter {
    fn write(&self, _line: &str) {}
}

/// A console object in the style of a runtime `console`.
///
/// # Examples
///
/// ```
/// use es_values::{Console, EsValue};
///
/// let console = Console::captured();
/// console.log(&[
///     EsValue::string("Block scope i is:"),
///     EsValue::string("block scope"),
/// ]);
/// assert_eq!(console.transcript(), vec!["Block scope i is: block scope"]);
/// ```
pub struct Console {
    transcript: RefCell<Vec<String>>,
    writer: Box<dyn ConsoleWriter>,
}

impl Console {
    /// Create a console that prints to stdout.
    pub fn new() -> Self {
        Console {
            transcript: RefCell::new(Vec::new()),
            writer: Box::new(StdoutWriter),
        }
    }

    /// Create a console that only records, for tests and the harness.
    pub fn captured() -> Self {
        Console {
            transcript: RefCell::new(Vec::new()),
            writer: Box::new(SilentWriter),
        }
    }

    /// Create a console with a custom writer.
    pub fn with_writer(writer: Box<dyn ConsoleWriter>) -> Self {
        Console {
            transcript: RefCell::new(Vec::new()),
            writer,
        }
    }

    /// Format arguments for one log line.
    ///
    /// A top-level string argument prints bare; any other value prints in
    /// its `inspect` form. Arguments are joined by single spaces.
    fn format_values(values: &[EsValue]) -> String {
        values
            .iter()
            .map(|v| match v {
                EsValue::String(s) => s.clone(),
                other => other.inspect(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `console.log(...values)`
    pub fn log(&self, values: &[EsValue]) {
        let line = Self::format_values(values);
        self.transcript.borrow_mut().push(line.clone());
        self.writer.write(&line);
    }

    /// Log a preformatted line, for caught errors and other plain text.
    pub fn log_text(&self, line: &str) {
        self.transcript.borrow_mut().push(line.to_string());
        self.writer.write(line);
    }

    /// All lines logged so far, in order.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::new()
    }
}

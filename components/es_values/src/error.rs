//! Error types for the exercise value model.
//!
//! The exercises only ever raise errors to demonstrate language rules
//! (assigning to a constant, redeclaring a binding, importing a missing
//! name), so the taxonomy stays small.

use std::fmt;

/// The kind of error an exercise can raise.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid declaration, e.g. redeclaring a `let` binding
    SyntaxError,
    /// Invalid operation on a value, e.g. assigning to a constant
    TypeError,
    /// Reference to a name that is not bound
    ReferenceError,
    /// Value outside the allowed range
    RangeError,
}

impl ErrorKind {
    /// The constructor name used when the error is displayed.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
        }
    }
}

/// An error raised while evaluating an exercise.
///
/// Displays the way a thrown error prints on a console:
/// `TypeError: Assignment to constant variable.`
///
/// # Examples
///
/// ```
/// use es_values::{ErrorKind, EsError};
///
/// let error = EsError::type_error("Assignment to constant variable.");
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(
///     error.to_string(),
///     "TypeError: Assignment to constant variable."
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl EsError {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        EsError {
            kind,
            message: message.into(),
        }
    }

    /// Create a SyntaxError.
    pub fn syntax_error(message: impl Into<String>) -> Self {
        EsError::new(ErrorKind::SyntaxError, message)
    }

    /// Create a TypeError.
    pub fn type_error(message: impl Into<String>) -> Self {
        EsError::new(ErrorKind::TypeError, message)
    }

    /// Create a ReferenceError.
    pub fn reference_error(message: impl Into<String>) -> Self {
        EsError::new(ErrorKind::ReferenceError, message)
    }

    /// Create a RangeError.
    pub fn range_error(message: impl Into<String>) -> Self {
        EsError::new(ErrorKind::RangeError, message)
    }
}

impl fmt::Display for EsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for EsError {}

/// Result type for exercise evaluation.
pub type EsResult<T> = Result<T, EsError>;

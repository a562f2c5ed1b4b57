//! Shared value model for the ES2015 exercises.
//!
//! This crate provides the foundational types the exercise modules build
//! on: a JavaScript-style value representation, the small error taxonomy
//! the exercises can raise, JavaScript number formatting, and a console
//! whose output can be captured and compared against expected transcripts.
//!
//! # Overview
//!
//! - [`EsValue`] - Tagged representation of JavaScript values
//! - [`EsError`] / [`ErrorKind`] - Errors in console form
//! - [`Console`] - Recording console with pluggable output
//! - [`format_number`] / [`to_fixed`] - `String()` and `toFixed` rules
//!
//! # Examples
//!
//! ```
//! use es_values::{Console, EsValue};
//!
//! let obj = EsValue::object_from([("PI", EsValue::number(3.14))]);
//! obj.freeze();
//! obj.set("PI", EsValue::number(99.0));
//! assert_eq!(obj.get("PI"), Some(EsValue::number(3.14)));
//!
//! let console = Console::captured();
//! console.log(&[obj]);
//! assert_eq!(console.transcript(), vec!["{ PI: 3.14 }"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod console;
mod error;
mod number;
mod value;

pub use console::{Console, ConsoleWriter};
pub use error::{ErrorKind, EsError, EsResult};
pub use number::{format_number, is_integer, to_fixed};
pub use value::{ArrayData, EsValue, ObjectData};

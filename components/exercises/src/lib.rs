//! The ES2015 language-feature exercises.
//!
//! Each module covers one syntax theme and is self-contained; no exercise
//! calls another. The [`registry`] collects one runnable demonstration per
//! exercise together with its hard-coded expected transcript.
//!
//! # Overview
//!
//! - [`declarations`] - `var`/`let`/`const` binding rules and scopes
//! - [`mutation`] - const arrays and frozen objects
//! - [`arrows`] - closures over higher-order functions, dates
//! - [`destructuring`] - tuples, rest patterns, nested fields
//! - [`templates`] - interpolated strings and generated markup
//! - [`classes`] - constructors and getter/setter accessors
//! - [`modules`] - import/export name resolution
//!
//! # Examples
//!
//! ```
//! use es_values::Console;
//! use exercises::find;
//!
//! let exercise = find("square-list").unwrap();
//! let console = Console::captured();
//! (exercise.run)(&console);
//! assert_eq!(console.transcript(), exercise.expected);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod arrows;
pub mod classes;
pub mod declarations;
pub mod destructuring;
pub mod modules;
pub mod mutation;
pub mod registry;
pub mod templates;

pub use arrows::{magic, my_concat, square_list, to_date_string};
pub use classes::{Thermostat, Vegetable};
pub use declarations::{cat_talk, check_scope, print_many_times, BindingKind, ScopeChain};
pub use destructuring::{half, remove_first_two, swap, today_span, DayTemps, Forecast, Stats};
pub use modules::{
    string_functions, ExportEntry, ImportEntry, ModuleGraph, ModuleRecord, ModuleStatus,
};
pub use mutation::{edit_in_place, freeze_constants, freeze_profile};
pub use registry::{catalog, find, Exercise, CATALOG};
pub use templates::{make_greeting, make_list, Person};

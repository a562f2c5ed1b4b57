//! Unit test suites for the exercises component.

mod declarations_test;
mod destructuring_test;
mod registry_test;

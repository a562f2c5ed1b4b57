//! Integration test suite for the Harmony exercises
//!
//! This crate verifies the components work together: the value model
//! under the exercises, the exercises under the harness, and the harness
//! under the report.

/// Re-export components for test convenience
pub mod components {
    pub use es_values;
    pub use exercises;
    pub use harmony_cli;
}

//! Integration test suite for the ES5 parser
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use es5_cli;
    pub use es5_parser;
}

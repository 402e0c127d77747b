//! ES5 Parser CLI Library
//!
//! Provides the Driver struct and supporting modules for the `es5-parse`
//! command.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod driver;
pub mod error;
pub mod logging;
pub mod repl;

pub use cli::{Cli, OutputFormat};
pub use driver::Driver;
pub use error::{CliError, CliResult};

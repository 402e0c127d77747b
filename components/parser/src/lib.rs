//! ES5 Parser Component
//!
//! Turns ES5 source text into a typed abstract syntax tree, reporting the
//! first syntax error with its line and column.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes source text on demand through [`TokenSource`]
//! - [`Parser`] - Recursive descent parser with strict-mode validation
//! - [`ast`] - Syntax tree node types, serializable to JSON
//! - [`regexp`] - Syntax check for regular expression literals
//!
//! # Example
//!
//! ```
//! use es5_parser::parse_script;
//!
//! let script = parse_script("var answer = 6 * 7;").unwrap();
//! assert_eq!(script.body.statements.len(), 1);
//!
//! let err = parse_script("'use strict'; with (a) {}").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Line 1, column 15: Strict mode code may not include a with statement"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod number;
pub mod parser;
pub mod precedence;
pub mod regexp;

pub use ast::{Expression, Script, Statement};
pub use core_types::{ErrorMessage, SourcePosition, SyntaxError};
pub use lexer::{Lexer, Token, TokenClass, TokenKind, TokenSource};
pub use parser::{is_left_hand_side, ParseContext, Parser, MAX_NESTING_DEPTH};

/// Parse source text as an ES5 Script
pub fn parse_script(source: &str) -> Result<Script, SyntaxError> {
    Parser::new(source)?.parse_script()
}

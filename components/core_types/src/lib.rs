//! Core types shared by the ES5 tokenizer, parser and command-line driver.
//!
//! This crate provides source location tracking, the static catalog of
//! syntax-error messages and the structured error value every parse failure
//! produces.
//!
//! # Overview
//!
//! - [`SourcePosition`] - Line/column/offset of a point in the source
//! - [`Span`] - Byte range of a token in the source
//! - [`ErrorMessage`] - Catalog of syntax-error codes and their templates
//! - [`SyntaxError`] - The single error value a failed parse returns
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorMessage, SourcePosition, SyntaxError};
//!
//! let position = SourcePosition { line: 1, column: 7, offset: 6 };
//! let error = SyntaxError::new(ErrorMessage::UnknownLabel, &["done"], position);
//!
//! assert_eq!(error.description, "Undefined label 'done'");
//! assert_eq!(error.to_string(), "Line 1, column 7: Undefined label 'done'");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;
mod words;

pub use error::{ErrorMessage, SyntaxError};
pub use source::{SourcePosition, Span};
pub use words::{is_restricted_word, is_strict_mode_reserved_word, STRICT_MODE_RESERVED_WORDS};

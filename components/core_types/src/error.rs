//! Syntax-error catalog and the structured error value.
//!
//! Every parse failure is reported as a single [`SyntaxError`] carrying a
//! catalog code, its rendered description and the position of the offending
//! token.

use crate::SourcePosition;
use serde::Serialize;
use thiserror::Error;

/// The static catalog of syntax-error codes.
///
/// Each code has a fixed message template. Templates containing `{0}` take
/// exactly one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorMessage {
    /// Lookahead does not continue the grammar; argument is the lexeme
    UnexpectedToken,
    /// A character that cannot start any token
    UnexpectedIllegalToken,
    /// Numeric literal where none is allowed
    UnexpectedNumber,
    /// String literal where none is allowed
    UnexpectedString,
    /// Identifier where none is allowed
    UnexpectedIdentifier,
    /// Future reserved word used as an identifier
    UnexpectedReservedWord,
    /// Input ended early
    UnexpectedEos,
    /// Line terminator between `throw` and its argument
    NewlineAfterThrow,
    /// Regular expression literal that does not compile
    InvalidRegularExpression,
    /// Regular expression literal without its closing `/`
    UnterminatedRegExp,
    /// Assignment or update target is not a left-hand side
    InvalidLhsInAssignment,
    /// For-in target is not a left-hand side
    InvalidLhsInForIn,
    /// Second `default` clause in one switch
    MultipleDefaultsInSwitch,
    /// `try` without `catch` or `finally`
    NoCatchOrFinally,
    /// Break/continue target label is not active; argument is the label
    UnknownLabel,
    /// Label already active in this function; argument is the label
    LabelRedeclaration,
    /// `continue` outside a loop
    IllegalContinue,
    /// `break` outside a loop or switch
    IllegalBreak,
    /// `return` outside a function body
    IllegalReturn,
    /// `with` in strict code
    StrictModeWith,
    /// Catch binding named `eval` or `arguments` in strict code
    StrictCatchVariable,
    /// Variable named `eval` or `arguments` in strict code
    StrictVarName,
    /// Parameter named `eval` or `arguments` in strict code
    StrictParamName,
    /// Duplicate parameter name in strict code
    StrictParamDupe,
    /// Function named `eval` or `arguments` in strict code
    StrictFunctionName,
    /// Legacy octal literal or escape in strict code
    StrictOctalLiteral,
    /// `delete` of a bare identifier in strict code
    StrictDelete,
    /// Repeated data property in strict code
    StrictDuplicateProperty,
    /// Data and accessor property share a name
    AccessorDataProperty,
    /// Two getters or two setters share a name
    AccessorGetSet,
    /// Assignment to `eval` or `arguments` in strict code
    StrictLhsAssignment,
    /// Postfix update of `eval` or `arguments` in strict code
    StrictLhsPostfix,
    /// Prefix update of `eval` or `arguments` in strict code
    StrictLhsPrefix,
    /// Strict-mode reserved word used as an identifier
    StrictReservedWord,
    /// Object literal key is not an identifier, string or number
    InvalidPropertyName,
    /// Statements or expressions nested past the parser's depth limit
    NestingTooDeep,
}

impl ErrorMessage {
    /// The message template for this code.
    pub fn template(self) -> &'static str {
        use ErrorMessage::*;
        match self {
            UnexpectedToken => "Unexpected token {0}",
            UnexpectedIllegalToken => "Unexpected token ILLEGAL",
            UnexpectedNumber => "Unexpected number",
            UnexpectedString => "Unexpected string",
            UnexpectedIdentifier => "Unexpected identifier",
            UnexpectedReservedWord => "Unexpected reserved word",
            UnexpectedEos => "Unexpected end of input",
            NewlineAfterThrow => "Illegal newline after throw",
            InvalidRegularExpression => "Invalid regular expression",
            UnterminatedRegExp => "Invalid regular expression: missing /",
            InvalidLhsInAssignment => "Invalid left-hand side in assignment",
            InvalidLhsInForIn => "Invalid left-hand side in for-in",
            MultipleDefaultsInSwitch => "More than one default clause in switch statement",
            NoCatchOrFinally => "Missing catch or finally after try",
            UnknownLabel => "Undefined label '{0}'",
            LabelRedeclaration => "Label '{0}' has already been declared",
            IllegalContinue => "Illegal continue statement",
            IllegalBreak => "Illegal break statement",
            IllegalReturn => "Illegal return statement",
            StrictModeWith => "Strict mode code may not include a with statement",
            StrictCatchVariable => "Catch variable may not be eval or arguments in strict mode",
            StrictVarName => "Variable name may not be eval or arguments in strict mode",
            StrictParamName => "Parameter name eval or arguments is not allowed in strict mode",
            StrictParamDupe => "Strict mode function may not have duplicate parameter names",
            StrictFunctionName => "Function name may not be eval or arguments in strict mode",
            StrictOctalLiteral => "Octal literals are not allowed in strict mode.",
            StrictDelete => "Delete of an unqualified identifier in strict mode.",
            StrictDuplicateProperty => {
                "Duplicate data property in object literal not allowed in strict mode"
            }
            AccessorDataProperty => {
                "Object literal may not have data and accessor property with the same name"
            }
            AccessorGetSet => {
                "Object literal may not have multiple get/set accessors with the same name"
            }
            StrictLhsAssignment => "Assignment to eval or arguments is not allowed in strict mode",
            StrictLhsPostfix => {
                "Postfix increment/decrement may not have eval or arguments operand in strict mode"
            }
            StrictLhsPrefix => {
                "Prefix increment/decrement may not have eval or arguments operand in strict mode"
            }
            StrictReservedWord => "Use of future reserved word in strict mode",
            InvalidPropertyName => {
                "Property name in object literal must be identifier, string literal or number literal"
            }
            NestingTooDeep => "Maximum nesting depth exceeded",
        }
    }

    /// Render the template, substituting `{n}` with `args[n]`.
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn format(self, args: &[&str]) -> String {
        let template = self.template();
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let substituted = after.find('}').and_then(|close| {
                let index: usize = after[..close].parse().ok()?;
                args.get(index).map(|arg| (arg, close))
            });
            match substituted {
                Some((arg, close)) => {
                    out.push_str(arg);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// A syntax error raised by the tokenizer or parser.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorMessage, SourcePosition, SyntaxError};
///
/// let error = SyntaxError::new(ErrorMessage::IllegalReturn, &[], SourcePosition::START);
/// assert_eq!(error.message, ErrorMessage::IllegalReturn);
/// assert_eq!(error.to_string(), "Line 1, column 1: Illegal return statement");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Line {}, column {}: {description}", .position.line, .position.column)]
pub struct SyntaxError {
    /// Catalog code
    pub message: ErrorMessage,
    /// Rendered message text
    pub description: String,
    /// Where the offending token starts
    pub position: SourcePosition,
}

impl SyntaxError {
    /// Create a syntax error from a catalog code, its arguments and a position.
    pub fn new(message: ErrorMessage, args: &[&str], position: SourcePosition) -> Self {
        Self {
            message,
            description: message.format(args),
            position,
        }
    }
}

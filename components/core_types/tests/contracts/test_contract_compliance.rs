//! Contract compliance tests for core_types
//!
//! These tests pin the public surface the parser and CLI depend on.

use core_types::{ErrorMessage, SourcePosition, Span, SyntaxError};

#[cfg(test)]
mod position_contract_tests {
    use super::*;

    /// Contract: positions are 1-based
    #[test]
    fn test_start_position_is_one_based() {
        assert_eq!(SourcePosition::START.line, 1);
        assert_eq!(SourcePosition::START.column, 1);
        assert_eq!(SourcePosition::START.offset, 0);
    }

    /// Contract: Span is a half-open byte range
    #[test]
    fn test_span_half_open() {
        assert_eq!(Span::new(0, 1).text("xy"), "x");
    }
}

#[cfg(test)]
mod error_contract_tests {
    use super::*;

    /// Contract: Display is "Line L, column C: description"
    #[test]
    fn test_display_format() {
        let error = SyntaxError::new(
            ErrorMessage::UnexpectedIdentifier,
            &[],
            SourcePosition {
                line: 4,
                column: 2,
                offset: 30,
            },
        );
        assert_eq!(error.to_string(), "Line 4, column 2: Unexpected identifier");
    }

    /// Contract: SyntaxError values compare structurally
    #[test]
    fn test_syntax_error_equality() {
        let a = SyntaxError::new(ErrorMessage::IllegalBreak, &[], SourcePosition::START);
        let b = a.clone();
        assert_eq!(a, b);
    }

    /// Contract: strict-mode templates match the catalog text
    #[test]
    fn test_strict_templates() {
        assert_eq!(
            ErrorMessage::StrictOctalLiteral.template(),
            "Octal literals are not allowed in strict mode."
        );
        assert_eq!(
            ErrorMessage::StrictDelete.template(),
            "Delete of an unqualified identifier in strict mode."
        );
    }
}

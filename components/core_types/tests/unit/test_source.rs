//! Unit tests for SourcePosition and Span

use core_types::{SourcePosition, Span};

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_creation() {
        let pos = SourcePosition {
            line: 10,
            column: 5,
            offset: 150,
        };

        assert_eq!(pos.line, 10);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 150);
    }

    #[test]
    fn test_source_position_is_copy() {
        let pos = SourcePosition::START;
        let copied = pos;
        assert_eq!(pos, copied);
    }

    #[test]
    fn test_source_position_ordering_fields() {
        let a = SourcePosition {
            line: 2,
            column: 1,
            offset: 8,
        };
        let b = SourcePosition {
            line: 2,
            column: 1,
            offset: 8,
        };
        assert_eq!(a, b);
        assert_ne!(a, SourcePosition::START);
    }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    #[test]
    fn test_span_covers_token_text() {
        let source = "a = 'str';";
        let span = Span::new(4, 9);
        assert_eq!(span.text(source), "'str'");
    }

    #[test]
    fn test_empty_span_at_end_of_input() {
        let span = Span::new(3, 3);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.text("abc"), "");
    }
}

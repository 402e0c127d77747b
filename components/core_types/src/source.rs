//! Source position and span types for syntax-error reporting.

use serde::Serialize;

/// Represents a position in source code.
///
/// Lines and columns are 1-based; the column counts bytes from the start of
/// the line. `offset` is the byte offset from the start of the source.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 10,
///     column: 5,
///     offset: 150,
/// };
///
/// assert_eq!(pos.line, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in bytes)
    pub column: u32,
    /// Byte offset from the start of the source
    pub offset: usize,
}

impl SourcePosition {
    /// Position of the first byte of a source text
    pub const START: SourcePosition = SourcePosition {
        line: 1,
        column: 1,
        offset: 0,
    };
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::START
    }
}

/// Byte range `[start, end)` of a token in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Offset of the first byte
    pub start: usize,
    /// Offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-width span (the end-of-input token)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice the covered text out of `source`
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_position_start() {
        let pos = SourcePosition::default();
        assert_eq!(pos, SourcePosition::START);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_span_text() {
        let span = Span::new(4, 7);
        assert_eq!(span.text("var foo = 1;"), "foo");
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_out_of_range_is_empty_text() {
        assert_eq!(Span::new(10, 12).text("abc"), "");
    }
}

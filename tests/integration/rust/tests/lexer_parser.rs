//! Lexer ↔ Parser Integration Tests
//!
//! Drives the parser through the `TokenSource` seam and checks that errors
//! raised on either side carry core_types positions.

use std::cell::Cell;
use std::rc::Rc;

use core_types::{ErrorMessage, SourcePosition, SyntaxError};
use es5_parser::ast::{Expression, Statement};
use es5_parser::{Lexer, Parser, Token, TokenKind, TokenSource};

#[derive(Default)]
struct Counters {
    lexed: Cell<usize>,
    regexps: Cell<usize>,
}

/// Token source that counts consumed tokens
struct CountingSource<'a> {
    inner: Lexer<'a>,
    counters: Rc<Counters>,
}

impl<'a> CountingSource<'a> {
    fn new(source: &'a str) -> (Self, Rc<Counters>) {
        let counters = Rc::new(Counters::default());
        let source = Self {
            inner: Lexer::new(source).unwrap(),
            counters: Rc::clone(&counters),
        };
        (source, counters)
    }
}

impl<'a> TokenSource<'a> for CountingSource<'a> {
    fn lookahead(&self) -> &Token<'a> {
        self.inner.lookahead()
    }

    fn lex(&mut self) -> Result<Token<'a>, SyntaxError> {
        self.counters.lexed.set(self.counters.lexed.get() + 1);
        self.inner.lex()
    }

    fn has_line_terminator_before_next(&self) -> bool {
        self.inner.has_line_terminator_before_next()
    }

    fn skip_comment(&mut self) -> Result<(), SyntaxError> {
        self.inner.skip_comment()
    }

    fn scan_regexp(&mut self) -> Result<Token<'a>, SyntaxError> {
        self.counters.regexps.set(self.counters.regexps.get() + 1);
        self.inner.scan_regexp()
    }

    fn source(&self) -> &'a str {
        self.inner.source()
    }

    fn index(&self) -> usize {
        self.inner.index()
    }
}

/// Test: every token of a statement is consumed exactly once
#[test]
fn test_parser_consumes_each_token_once() {
    let source = "var a = b + c;";
    let token_count = Lexer::tokenize(source).unwrap().len();

    let (tokens, counters) = CountingSource::new(source);
    let script = Parser::from_token_source(tokens).parse_script().unwrap();
    assert_eq!(script.body.statements.len(), 1);
    assert_eq!(counters.lexed.get(), token_count);
    assert_eq!(counters.regexps.get(), 0);
}

/// Test: the parser asks the lexer to rescan `/` as a regexp only in
/// operand position
#[test]
fn test_regexp_rescan_only_for_operands() {
    let (tokens, counters) = CountingSource::new("x = a / b; y = /re/g;");
    Parser::from_token_source(tokens).parse_script().unwrap();
    assert_eq!(counters.regexps.get(), 1);
}

/// Test: a tokenizer error surfaces unchanged from the parser
#[test]
fn test_lexer_error_position() {
    let err = es5_parser::parse_script("var s = 1;\nvar t = 'open").unwrap_err();
    assert_eq!(err.message, ErrorMessage::UnexpectedIllegalToken);
    assert_eq!(err.position.line, 2);
}

/// Test: parser errors use one-based lines and columns
#[test]
fn test_parser_error_position() {
    let err = es5_parser::parse_script("if (a) {\n  continue;\n}").unwrap_err();
    assert_eq!(err.message, ErrorMessage::IllegalContinue);
    assert_eq!(
        (err.position.line, err.position.column),
        (2, 3),
        "{:?}",
        err.position
    );
    assert!(err.position.offset > SourcePosition::START.offset);
}

/// Test: the lexer and parser agree on keyword property names
#[test]
fn test_keywords_as_property_names() {
    assert_eq!(
        Lexer::new("default").unwrap().lookahead().kind,
        TokenKind::Default
    );
    let script = es5_parser::parse_script("a.default = b.new;").unwrap();
    match &script.body.statements[0] {
        Statement::ExpressionStatement {
            expression: Expression::AssignmentExpression { binding, .. },
        } => assert!(matches!(
            binding.as_ref(),
            Expression::StaticMemberExpression { property, .. } if property.name == "default"
        )),
        other => panic!("unexpected {:?}", other),
    }
}

//! Contract tests for the es5_parser API
//!
//! These tests verify the parser component exposes its contract: a lexer
//! behind the `TokenSource` interface, a parser generic over it, and
//! `SyntaxError` results carrying a catalog code and position.

use es5_parser::ast::{Directive, Expression, FunctionBody, Script, Statement};
use es5_parser::{
    parse_script, ErrorMessage, Lexer, ParseContext, Parser, SyntaxError, Token, TokenClass,
    TokenKind, TokenSource,
};

// =============================================================================
// Lexer Contract Tests
// =============================================================================

#[test]
fn test_lexer_new_returns_result() {
    let result: Result<Lexer, SyntaxError> = Lexer::new("var x = 42;");
    assert!(result.is_ok());
}

#[test]
fn test_lexer_lookahead_is_first_token() {
    let lexer = Lexer::new("  answer").unwrap();
    let token: &Token = lexer.lookahead();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.name(), "answer");
    assert_eq!(token.start.column, 3);
}

#[test]
fn test_lexer_lex_advances() {
    let mut lexer = Lexer::new("a = 1").unwrap();
    assert_eq!(lexer.lex().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.lex().unwrap().kind, TokenKind::Assign);
    assert_eq!(lexer.lex().unwrap().number_value(), 1.0);
    assert!(lexer.eof());
}

#[test]
fn test_lexer_eat_only_matching() {
    let mut lexer = Lexer::new("; x").unwrap();
    assert!(lexer.eat(TokenKind::Comma).unwrap().is_none());
    assert!(lexer.eat(TokenKind::Semicolon).unwrap().is_some());
    assert!(lexer.matches(TokenKind::Identifier));
}

#[test]
fn test_lexer_reports_line_terminators() {
    let mut lexer = Lexer::new("a\nb c").unwrap();
    lexer.lex().unwrap();
    assert!(lexer.has_line_terminator_before_next());
    lexer.lex().unwrap();
    assert!(!lexer.has_line_terminator_before_next());
}

#[test]
fn test_token_classes() {
    let tokens = Lexer::tokenize("x if 'a' 1 true null ( enum").unwrap();
    let classes: Vec<TokenClass> = tokens.iter().map(|t| t.kind.class()).collect();
    assert_eq!(
        classes,
        vec![
            TokenClass::Ident,
            TokenClass::Keyword,
            TokenClass::StringLiteral,
            TokenClass::NumericLiteral,
            TokenClass::BooleanLiteral,
            TokenClass::NullLiteral,
            TokenClass::Punctuator,
            TokenClass::Keyword,
        ]
    );
}

// =============================================================================
// Parser Contract Tests
// =============================================================================

#[test]
fn test_parser_new_returns_result() {
    let result: Result<Parser, SyntaxError> = Parser::new("var x = 42;");
    assert!(result.is_ok());
}

#[test]
fn test_parser_parse_script_returns_script() {
    let mut parser = Parser::new("var x = 42;").unwrap();
    let result: Result<Script, SyntaxError> = parser.parse_script();
    assert!(result.is_ok());
}

#[test]
fn test_parser_over_explicit_token_source() {
    let lexer = Lexer::new("x;").unwrap();
    let mut parser = Parser::from_token_source(lexer);
    let script = parser.parse_script().unwrap();
    assert_eq!(script.body.statements.len(), 1);
}

#[test]
fn test_parser_initial_context() {
    let parser = Parser::new("").unwrap();
    let context = parser.context();
    assert_eq!(context, ParseContext::default());
    assert!(!context.strict);
    assert!(context.allow_in);
    assert!(!context.in_iteration);
    assert!(!context.in_switch);
    assert!(!context.in_function_body);
}

#[test]
fn test_parse_script_function() {
    let script = parse_script("'use strict'; f();").unwrap();
    assert_eq!(
        script,
        Script {
            body: FunctionBody {
                directives: vec![Directive::UseStrictDirective],
                statements: vec![Statement::ExpressionStatement {
                    expression: Expression::CallExpression {
                        callee: Box::new(Expression::identifier("f")),
                        arguments: Vec::new(),
                    }
                }],
            }
        }
    );
}

// =============================================================================
// Error Contract Tests
// =============================================================================

#[test]
fn test_error_carries_code_and_position() {
    let err = parse_script("var a;\n  break;").unwrap_err();
    assert_eq!(err.message, ErrorMessage::IllegalBreak);
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.column, 3);
    assert_eq!(err.description, "Illegal break statement");
}

#[test]
fn test_error_display_includes_location() {
    let err = parse_script("var a = ;").unwrap_err();
    assert_eq!(err.to_string(), "Line 1, column 9: Unexpected token ;");
}

#[test]
fn test_lexer_error_surfaces_through_parser() {
    let err = parse_script("'unterminated").unwrap_err();
    assert_eq!(err.message, ErrorMessage::UnexpectedIllegalToken);
}

#[test]
fn test_unterminated_regexp() {
    let err = parse_script("x = /abc").unwrap_err();
    assert_eq!(err.message, ErrorMessage::UnterminatedRegExp);
}

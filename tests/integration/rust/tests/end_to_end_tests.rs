//! End-to-end parsing of realistic ES5 programs
//!
//! Each test feeds a complete script through `es5_parser::parse_script` and
//! checks the resulting tree or the reported error.

use core_types::ErrorMessage;
use es5_parser::ast::{Directive, Expression, Statement};
use es5_parser::parse_script;

fn statement_kinds(source: &str) -> Vec<&'static str> {
    parse_script(source)
        .unwrap()
        .body
        .statements
        .iter()
        .map(Statement::node_kind)
        .collect()
}

fn error_of(source: &str) -> ErrorMessage {
    parse_script(source).unwrap_err().message
}

// ============================================================================
// Whole programs
// ============================================================================

/// Test: module pattern with closures, object literal and accessors
#[test]
fn test_module_pattern() {
    let source = r#"
        var Counter = (function () {
            'use strict';
            var count = 0;
            function bump(by) {
                count += by === undefined ? 1 : by;
                return count;
            }
            return {
                get value() { return count; },
                set value(v) { count = v; },
                bump: bump,
                reset: function () { count = 0; }
            };
        })();
        Counter.bump(2);
    "#;
    assert_eq!(
        statement_kinds(source),
        vec!["VariableDeclarationStatement", "ExpressionStatement"]
    );
}

/// Test: every statement form in one script
#[test]
fn test_all_statement_forms() {
    let source = r#"
        outer: for (var i = 0; i < 10; i++) {
            for (var key in object) {
                if (!object.hasOwnProperty(key)) continue;
                if (key === 'stop') break outer;
            }
        }
        do { i--; } while (i > 0)
        while (false) ;
        switch (i) {
            case 0: log('zero'); break;
            default: log('other');
            case 1: log('one');
        }
        try { risky(); } catch (e) { throw e; } finally { cleanup(); }
        try { risky(); } finally { cleanup(); }
        with (Math) { x = max(1, 2); }
        debugger;
        {}
    "#;
    assert_eq!(
        statement_kinds(source),
        vec![
            "LabeledStatement",
            "DoWhileStatement",
            "WhileStatement",
            "SwitchStatementWithDefault",
            "TryFinallyStatement",
            "TryFinallyStatement",
            "WithStatement",
            "DebuggerStatement",
            "BlockStatement",
        ]
    );
}

/// Test: automatic semicolon insertion across lines
#[test]
fn test_semicolon_insertion() {
    let source = "var a = 1\nvar b = a\n++b\nreturnValue()\n";
    assert_eq!(
        statement_kinds(source),
        vec![
            "VariableDeclarationStatement",
            "VariableDeclarationStatement",
            "ExpressionStatement",
            "ExpressionStatement",
        ]
    );
}

/// Test: return without a value before a line break
#[test]
fn test_restricted_return() {
    let script = parse_script("function f() {\n  return\n  42;\n}").unwrap();
    match &script.body.statements[0] {
        Statement::FunctionDeclaration { body, .. } => {
            assert_eq!(
                body.statements[0],
                Statement::ReturnStatement { expression: None }
            );
            assert_eq!(body.statements.len(), 2);
        }
        other => panic!("unexpected {:?}", other),
    }
}

/// Test: directive prologues are kept per function
#[test]
fn test_nested_directives() {
    let script = parse_script("'a'; function f() { 'use strict'; 'b'; }").unwrap();
    assert_eq!(
        script.body.directives,
        vec![Directive::UnknownDirective {
            value: "a".to_string()
        }]
    );
    match &script.body.statements[0] {
        Statement::FunctionDeclaration { body, .. } => assert_eq!(
            body.directives,
            vec![
                Directive::UseStrictDirective,
                Directive::UnknownDirective {
                    value: "b".to_string()
                }
            ]
        ),
        other => panic!("unexpected {:?}", other),
    }
}

/// Test: regular expressions and division in the same program
#[test]
fn test_regexp_and_division() {
    let script = parse_script("var r = /a+(b|c)?/gi, half = total / 2 / count;").unwrap();
    match &script.body.statements[0] {
        Statement::VariableDeclarationStatement { declaration } => {
            let inits: Vec<_> = declaration
                .declarators
                .iter()
                .map(|d| d.init.as_ref().map(Expression::node_kind))
                .collect();
            assert_eq!(
                inits,
                vec![
                    Some("LiteralRegExpExpression"),
                    Some("BinaryExpression")
                ]
            );
        }
        other => panic!("unexpected {:?}", other),
    }
}

// ============================================================================
// Strict mode across the program
// ============================================================================

/// Test: strictness inherited by nested functions
#[test]
fn test_strict_inherited() {
    assert_eq!(
        error_of("'use strict'; function f() { with (o) {} }"),
        ErrorMessage::StrictModeWith
    );
    assert_eq!(
        error_of("'use strict'; var o = { a: 1, a: 2 };"),
        ErrorMessage::StrictDuplicateProperty
    );
}

/// Test: strictness does not leak out of a function
#[test]
fn test_strict_scoped_to_function() {
    assert!(parse_script("function f() { 'use strict'; } with (o) {}").is_ok());
}

/// Test: a function that becomes strict checks its own name and parameters
#[test]
fn test_function_turns_strict() {
    assert_eq!(
        error_of("function eval() { 'use strict'; }"),
        ErrorMessage::StrictFunctionName
    );
    assert_eq!(
        error_of("function f(a, a) { 'use strict'; }"),
        ErrorMessage::StrictParamDupe
    );
    assert!(parse_script("function f(a, a) { }").is_ok());
}

/// Test: octal literal ahead of the strict directive
#[test]
fn test_octal_before_use_strict() {
    assert_eq!(
        error_of("function f() { '\\07'; 'use strict'; }"),
        ErrorMessage::StrictOctalLiteral
    );
}

// ============================================================================
// Error reporting
// ============================================================================

/// Test: error display uses the one-based line and column
#[test]
fn test_error_display() {
    let err = parse_script("var ok = 1;\nvar = 2;").unwrap_err();
    assert_eq!(err.message, ErrorMessage::UnexpectedToken);
    assert_eq!(err.to_string(), "Line 2, column 5: Unexpected token =");
}

/// Test: unterminated input
#[test]
fn test_unexpected_end() {
    assert_eq!(error_of("function f() {"), ErrorMessage::UnexpectedEos);
    assert_eq!(error_of("a = [1, 2"), ErrorMessage::UnexpectedEos);
}

/// Test: control flow outside its construct
#[test]
fn test_misplaced_control_flow() {
    assert_eq!(error_of("return 1;"), ErrorMessage::IllegalReturn);
    assert_eq!(error_of("break;"), ErrorMessage::IllegalBreak);
    assert_eq!(error_of("x: while (1) { break y; }"), ErrorMessage::UnknownLabel);
    assert_eq!(
        error_of("while (1) { function f() { continue; } }"),
        ErrorMessage::IllegalContinue
    );
}

//! End-to-end tests for the CLI driver
//!
//! Runs scripts from disk through `es5_cli::Driver` and checks the rendered
//! output and error mapping.

use std::io::Write;

use es5_cli::{CliError, Driver, OutputFormat};
use tempfile::NamedTempFile;

fn script_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

/// Test: summary of a file on disk
#[test]
fn test_e2e_file_summary() {
    let file = script_file("'use strict';\nvar a = 1;\nfunction f() { return a; }\nf();\n");
    let output = Driver::default().run_file(file.path()).unwrap().unwrap();
    assert_eq!(
        output,
        "3 statements, 1 directive (strict)\n  VariableDeclarationStatement\n  FunctionDeclaration\n  ExpressionStatement"
    );
}

/// Test: JSON output of a file is well-formed and tagged
#[test]
fn test_e2e_file_json() {
    let file = script_file("var re = /x/g; label: for (;;) break label;");
    let output = Driver::new(OutputFormat::Json)
        .run_file(file.path())
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let statements = &value["body"]["statements"];
    assert_eq!(statements[0]["type"], "VariableDeclarationStatement");
    assert_eq!(
        statements[0]["declaration"]["declarators"][0]["init"]["type"],
        "LiteralRegExpExpression"
    );
    assert_eq!(statements[1]["type"], "LabeledStatement");
}

/// Test: the same tree in every format
#[test]
fn test_e2e_formats_agree() {
    let source = "x = y ? 1 : 2;";
    let mut driver = Driver::default();
    let script = driver.parse_source(source, "formats").unwrap();

    driver.set_format(OutputFormat::Debug);
    assert!(driver
        .render(&script)
        .unwrap()
        .contains("ConditionalExpression"));

    driver.set_format(OutputFormat::Json);
    assert!(driver
        .render(&script)
        .unwrap()
        .contains("\"ConditionalExpression\""));

    driver.set_format(OutputFormat::Summary);
    assert_eq!(
        driver.render(&script).unwrap(),
        "1 statement, 0 directives\n  ExpressionStatement"
    );
}

/// Test: syntax error in a file maps to exit code 1
#[test]
fn test_e2e_syntax_error() {
    let file = script_file("var x = ;");
    let err = Driver::default().run_file(file.path()).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    match err {
        CliError::Syntax(e) => assert_eq!(e.position.line, 1),
        other => panic!("unexpected {:?}", other),
    }
}

/// Test: missing file maps to exit code 2
#[test]
fn test_e2e_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Driver::default()
        .run_file(&dir.path().join("missing.js"))
        .unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert_eq!(err.exit_code(), 2);
}

/// Test: quiet mode validates without rendering
#[test]
fn test_e2e_quiet_mode() {
    let file = script_file("function ok() {}");
    let driver = Driver::new(OutputFormat::Json).with_quiet(true);
    assert_eq!(driver.run_file(file.path()).unwrap(), None);

    let bad = script_file("function () {}");
    assert!(driver.run_file(bad.path()).is_err());
}

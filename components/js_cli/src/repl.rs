//! REPL (Read-Parse-Print Loop) implementation

use clap::ValueEnum;
use core_types::ErrorMessage;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::OutputFormat;
use crate::driver::Driver;
use crate::error::{CliError, CliResult};

const HELP: &str = "\
REPL Commands:
  .help            - Show this help message
  .format          - Show the output format
  .format <FORMAT> - Switch output format (debug, json, summary)
  .exit            - Exit the REPL";

/// Run the interactive REPL
///
/// Lines accumulate until brackets balance and the input no longer ends
/// mid-statement, then the buffer is parsed and its tree printed.
pub fn run_repl(driver: &mut Driver) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("es5-parse v{}", env!("CARGO_PKG_VERSION"));
    println!("Type ES5 source to see its tree, or .help for commands.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && trimmed.starts_with('.') {
                    match handle_repl_command(trimmed, driver) {
                        ReplCommand::Exit => break,
                        ReplCommand::Message(message) => println!("{}", message),
                    }
                    continue;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if line_buffer.trim().is_empty() {
                    line_buffer.clear();
                    continue;
                }
                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }

                match driver.run(&line_buffer, "repl") {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => println!("ok"),
                    // input stops mid-statement; keep reading
                    Err(CliError::Syntax(e)) if e.message == ErrorMessage::UnexpectedEos => {
                        in_multiline = true;
                        continue;
                    }
                    Err(e) => eprintln!("{}", e),
                }

                let _ = editor.add_history_entry(line_buffer.as_str());
                line_buffer.clear();
                in_multiline = false;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type .exit to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!();
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Result of a dot command
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Message(String),
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, driver: &mut Driver) -> ReplCommand {
    let mut words = command.split_whitespace();
    match (words.next(), words.next()) {
        (Some(".exit"), None) => ReplCommand::Exit,
        (Some(".help"), None) => ReplCommand::Message(HELP.to_string()),
        (Some(".format"), None) => {
            ReplCommand::Message(format!("Output format: {}", format_name(driver.format())))
        }
        (Some(".format"), Some(name)) => match <OutputFormat as ValueEnum>::from_str(name, true) {
            Ok(format) => {
                driver.set_format(format);
                ReplCommand::Message(format!("Output format: {}", format_name(format)))
            }
            Err(_) => ReplCommand::Message(format!(
                "Unknown format: {} (expected debug, json or summary)",
                name
            )),
        },
        _ => ReplCommand::Message(format!(
            "Unknown command: {}\nType .help for available commands",
            command
        )),
    }
}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Debug => "debug",
        OutputFormat::Json => "json",
        OutputFormat::Summary => "summary",
    }
}

/// Check if the input appears to be complete
///
/// This is a simple heuristic that checks for balanced braces/brackets/parens
/// outside strings and comments
fn is_input_complete(input: &str) -> bool {
    let mut depth: i32 = 0;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                let mut closed = false;
                while let Some(s) = chars.next() {
                    match s {
                        '\\' => {
                            chars.next();
                        }
                        '\n' => break,
                        _ if s == c => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return false;
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for s in chars.by_ref() {
                    if s == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = ' ';
                let mut closed = false;
                for s in chars.by_ref() {
                    if previous == '*' && s == '/' {
                        closed = true;
                        break;
                    }
                    previous = s;
                }
                if !closed {
                    return false;
                }
            }
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth -= 1,
            _ => {}
        }
    }

    depth <= 0
}

//! Command-line arguments

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

/// How a parsed script is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rust debug form of the tree
    Debug,
    /// Pretty-printed JSON tree
    Json,
    /// Statement counts and top-level statement kinds
    #[default]
    Summary,
}

/// Parse ES5 scripts and report the first syntax error
#[derive(Debug, Parser)]
#[command(name = "es5-parse", version, about)]
pub struct Cli {
    /// Script to parse
    #[arg(value_name = "FILE", conflicts_with_all = ["file", "eval"])]
    pub input: Option<PathBuf>,

    /// Script to parse
    #[arg(short, long, value_name = "FILE", conflicts_with = "eval")]
    pub file: Option<PathBuf>,

    /// Parse inline source instead of a file
    #[arg(short, long, value_name = "CODE")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Output format for parsed scripts
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Only validate; print nothing on success
    #[arg(short, long)]
    pub quiet: bool,

    /// Log parser activity at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Arguments for parsing a single file with default options
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            input: None,
            file: Some(path.into()),
            eval: None,
            repl: false,
            format: OutputFormat::default(),
            quiet: false,
            verbose: false,
        }
    }

    /// File named either positionally or with `--file`
    pub fn source_file(&self) -> Option<&Path> {
        self.file.as_deref().or(self.input.as_deref())
    }
}

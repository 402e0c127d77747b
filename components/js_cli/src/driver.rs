//! Parsing driver behind the CLI and REPL
//!
//! The Driver reads sources, runs the parser and renders the resulting tree
//! in the selected [`OutputFormat`].

use std::path::Path;

use es5_parser::ast::{Directive, Script};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Parses sources and renders trees
#[derive(Debug, Clone)]
pub struct Driver {
    format: OutputFormat,
    quiet: bool,
}

impl Driver {
    /// Create a driver printing trees in `format`
    ///
    /// # Example
    /// ```
    /// use es5_cli::{Driver, OutputFormat};
    ///
    /// let driver = Driver::new(OutputFormat::Summary);
    /// assert_eq!(driver.format(), OutputFormat::Summary);
    /// ```
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            quiet: false,
        }
    }

    /// Validate only; successful parses render nothing
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Current output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Change the output format
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// Whether successful parses are rendered
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Read and parse a file
    ///
    /// # Errors
    /// `CliError::Io` if the file cannot be read, `CliError::Syntax` if it
    /// does not parse.
    pub fn parse_file(&self, path: &Path) -> CliResult<Script> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_source(&source, &path.display().to_string())
    }

    /// Parse source text; `origin` names it in log events
    pub fn parse_source(&self, source: &str, origin: &str) -> CliResult<Script> {
        debug!(origin, bytes = source.len(), "parsing");
        let script = es5_parser::parse_script(source)?;
        info!(
            origin,
            statements = script.body.statements.len(),
            directives = script.body.directives.len(),
            "parsed"
        );
        Ok(script)
    }

    /// Parse and render; `None` when quiet
    pub fn run(&self, source: &str, origin: &str) -> CliResult<Option<String>> {
        let script = self.parse_source(source, origin)?;
        if self.quiet {
            return Ok(None);
        }
        self.render(&script).map(Some)
    }

    /// Parse a file and render it; `None` when quiet
    pub fn run_file(&self, path: &Path) -> CliResult<Option<String>> {
        let script = self.parse_file(path)?;
        if self.quiet {
            return Ok(None);
        }
        self.render(&script).map(Some)
    }

    /// Render a tree in the current format
    pub fn render(&self, script: &Script) -> CliResult<String> {
        match self.format {
            OutputFormat::Debug => Ok(format!("{:#?}", script)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(script)?),
            OutputFormat::Summary => Ok(summarize(script)),
        }
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

/// One line of counts, then one line per top-level statement kind
pub fn summarize(script: &Script) -> String {
    let body = &script.body;
    let strict = body
        .directives
        .iter()
        .any(|d| matches!(d, Directive::UseStrictDirective));

    let mut out = format!(
        "{} {}, {} {}{}",
        body.statements.len(),
        plural(body.statements.len(), "statement"),
        body.directives.len(),
        plural(body.directives.len(), "directive"),
        if strict { " (strict)" } else { "" }
    );
    for statement in &body.statements {
        out.push_str("\n  ");
        out.push_str(statement.node_kind());
    }
    out
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

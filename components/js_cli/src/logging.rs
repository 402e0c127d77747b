//! Tracing setup for the CLI.
//!
//! ```bash
//! # Parser internals, including directive and strict-mode events
//! ES5_LOG=trace es5-parse script.js
//!
//! # Only the per-input summary
//! ES5_LOG=es5_cli=info es5-parse script.js
//! ```
//!
//! The subscriber is only installed when `ES5_LOG` (or `RUST_LOG`) is set or
//! `--verbose` is given. Output goes to stderr so it never mixes with the
//! rendered tree on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "ES5_LOG";

/// Filter directives to use, if logging is wanted at all.
///
/// `--verbose` forces `debug`. Otherwise `ES5_LOG` takes precedence over
/// `RUST_LOG`.
pub fn filter_directives(
    verbose: bool,
    es5_log: Option<String>,
    rust_log: Option<String>,
) -> Option<String> {
    if verbose {
        return Some("debug".to_string());
    }
    es5_log.or(rust_log)
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when no filter applies. A subscriber that is already
/// installed is left in place.
pub fn init_logging(verbose: bool) {
    let directives = filter_directives(
        verbose,
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let Some(directives) = directives else {
        return;
    };

    let filter = EnvFilter::builder().parse_lossy(directives);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_logging_by_default() {
        assert_eq!(filter_directives(false, None, None), None);
    }

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(
            filter_directives(true, Some("trace".to_string()), None),
            Some("debug".to_string())
        );
    }

    #[test]
    fn test_es5_log_takes_precedence() {
        assert_eq!(
            filter_directives(false, Some("trace".to_string()), Some("warn".to_string())),
            Some("trace".to_string())
        );
        assert_eq!(
            filter_directives(false, None, Some("warn".to_string())),
            Some("warn".to_string())
        );
    }
}

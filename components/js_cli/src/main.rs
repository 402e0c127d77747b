//! es5-parse command-line tool
//!
//! Entry point for the parser CLI. Parses CLI arguments and delegates to
//! the Driver. Exits with 1 when the input has a syntax error and with 2
//! for I/O or usage errors.

use clap::Parser as ClapParser;
use es5_cli::logging::init_logging;
use es5_cli::repl::run_repl;
use es5_cli::{Cli, CliError, CliResult, Driver};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        match (&err, cli.source_file()) {
            (CliError::Syntax(_), Some(path)) => eprintln!("{}: {}", path.display(), err),
            _ => eprintln!("{}", err),
        }
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let mut driver = Driver::new(cli.format).with_quiet(cli.quiet);

    let output = if let Some(path) = cli.source_file() {
        driver.run_file(path)?
    } else if let Some(code) = &cli.eval {
        driver.run(code, "<eval>")?
    } else if cli.repl {
        return run_repl(&mut driver);
    } else {
        return Err(CliError::Usage(
            "Usage: es5-parse [FILE] | --eval <CODE> | --repl\n\nRun 'es5-parse --help' for more options."
                .to_string(),
        ));
    };

    if let Some(output) = output {
        println!("{}", output);
    }
    Ok(())
}

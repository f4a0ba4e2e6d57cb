//! toka - print the token stream of a toka source.
//!
//! Reads a file (or standard input), prints one token name per line on
//! stdout and reports lexical errors on stderr.
//!
//! Exit status: 0 on success, 1 on a lexical error, 2 if the input could
//! not be read or the configuration is invalid.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toka_drv::config::LogConfig;
use toka_drv::{run, Config, DriverError, Input, Outcome};
use toka_util::Handler;

const EXIT_LEXICAL_ERROR: u8 = 1;
const EXIT_FAILURE: u8 = 2;

/// Print the token stream of a toka source
#[derive(Parser, Debug)]
#[command(name = "toka")]
#[command(author = "Toka Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token stream of a toka source", long_about = None)]
struct Cli {
    /// Source file to tokenize (default: standard input, also `-`)
    file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "TOKA_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TOKA_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "TOKA_NO_COLOR")]
    no_color: bool,

    /// Report a lexical error as a trailing `Err` line and exit with 0
    #[arg(long)]
    legacy_errors: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    fn apply_overrides(&self, config: &mut Config) {
        if self.legacy_errors {
            config.output.legacy_errors = true;
        }
        if self.no_color {
            config.log.color = false;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    init_logging(&config.log, cli.verbose)?;

    let input = Input::from_arg(cli.file);
    let reader = input.open()?;

    let handler = Handler::new();
    let mut out = BufWriter::new(io::stdout().lock());
    let outcome = run(&config, reader, &handler, &mut out)?;

    match outcome {
        Outcome::Completed { .. } => Ok(ExitCode::SUCCESS),
        Outcome::LexicalError { .. } if config.output.legacy_errors => Ok(ExitCode::SUCCESS),
        Outcome::LexicalError { .. } => {
            handler
                .render_to(&input.to_string(), &mut io::stderr().lock())
                .map_err(DriverError::from)?;
            Ok(ExitCode::from(EXIT_LEXICAL_ERROR))
        }
    }
}

/// Install the stderr log subscriber; stdout carries the token stream.
fn init_logging(log: &LogConfig, verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&log.level)
            .with_context(|| format!("invalid log level `{}`", log.level))?
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(log.color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

//! toka-drv - Token stream driver
//!
//! Pulls tokens from a [`Lexer`] and prints one name per line. The first
//! token has no leading separator and every later one is preceded by a
//! newline, so the output never ends in a newline.
//!
//! ```
//! use toka_drv::{run, Config, Outcome};
//! use toka_util::Handler;
//!
//! let handler = Handler::new();
//! let mut out = Vec::new();
//! let outcome = run(&Config::default(), "x = 007;".as_bytes(), &handler, &mut out).unwrap();
//!
//! assert_eq!(outcome, Outcome::Completed { tokens: 4 });
//! assert_eq!(String::from_utf8(out).unwrap(), "Ident(x)\nAssign\nNumber(007)\nSemicolon");
//! ```

pub mod config;
pub mod error;

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use toka_lex::{LexError, Lexer, Token};
use toka_util::{Diagnostic, Handler};
use tracing::{debug, info};

pub use config::Config;
pub use error::{DriverError, Result};

/// Written in place of the remaining tokens when legacy error output is on.
pub const LEGACY_ERROR_MARKER: &str = "Err";

/// Where the driver reads source text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Input {
    /// Interprets the optional `FILE` argument; absent or `-` means stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Input::File(path),
            _ => Input::Stdin,
        }
    }

    /// Opens the input for reading.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path).map_err(|source| DriverError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input was fully tokenized.
    Completed {
        /// Number of tokens printed
        tokens: usize,
    },
    /// Tokenizing stopped at a character that starts no token.
    LexicalError {
        /// Number of tokens printed before the error
        tokens: usize,
        /// The diagnostic describing the error
        diagnostic: Diagnostic,
    },
}

impl Outcome {
    /// Number of tokens printed.
    pub fn tokens(&self) -> usize {
        match self {
            Outcome::Completed { tokens } | Outcome::LexicalError { tokens, .. } => *tokens,
        }
    }

    /// Returns true if the run stopped at a lexical error.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::LexicalError { .. })
    }
}

/// Writes token names separated by newlines, with no trailing newline.
pub struct TokenPrinter<W: Write> {
    out: W,
    printed: usize,
}

impl<W: Write> TokenPrinter<W> {
    /// Creates a printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, printed: 0 }
    }

    /// Prints one token, preceded by a newline unless it is the first.
    pub fn print(&mut self, token: &Token) -> io::Result<()> {
        if self.printed > 0 {
            self.out.write_all(b"\n")?;
        }
        write!(self.out, "{}", token)?;
        self.printed += 1;
        Ok(())
    }

    /// Prints the legacy error marker on its own line.
    ///
    /// The marker is always preceded by a newline, even before the first
    /// token.
    pub fn print_legacy_error(&mut self) -> io::Result<()> {
        write!(self.out, "\n{}", LEGACY_ERROR_MARKER)
    }

    /// Number of tokens printed so far.
    pub fn printed(&self) -> usize {
        self.printed
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Tokenizes `input` and prints the token stream to `out`.
///
/// Lexical errors are reported to `handler` and end the run with
/// [`Outcome::LexicalError`]; tokens before the error are still printed.
/// With `output.legacy_errors` set, the legacy marker is also written to
/// `out`.
///
/// # Errors
///
/// Returns [`DriverError`] if reading the input or writing the output fails.
pub fn run<R: Read, W: Write>(
    config: &Config,
    input: R,
    handler: &Handler,
    out: &mut W,
) -> Result<Outcome> {
    let mut printer = TokenPrinter::new(out);
    let mut lexer = Lexer::new(input, handler);

    let error = loop {
        match lexer.next_token() {
            Ok(Some(token)) => printer.print(&token)?,
            Ok(None) => break None,
            Err(LexError::Io(e)) => return Err(LexError::Io(e).into()),
            Err(e) => break Some(e),
        }
    };

    let tokens = printer.printed();
    let outcome = match error {
        None => {
            info!(tokens, "input tokenized");
            Outcome::Completed { tokens }
        }
        Some(error) => {
            if config.output.legacy_errors {
                printer.print_legacy_error()?;
            }
            debug!(tokens, %error, "tokenizing stopped");
            let diagnostic = handler.diagnostics().pop().unwrap_or_else(|| {
                Diagnostic::error(error.to_string(), error.span().unwrap_or_default())
            });
            Outcome::LexicalError { tokens, diagnostic }
        }
    };

    printer.finish()?;
    Ok(outcome)
}

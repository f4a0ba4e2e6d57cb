//! Error handling for the toka driver.
//!
//! Lexical errors are not driver errors: they end a run normally with
//! [`Outcome::LexicalError`](crate::Outcome::LexicalError). Everything here
//! stops the driver and maps to exit status 2.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toka_lex::LexError;
use toka_util::DiagnosticError;

/// Main error type for the toka driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing, unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },

    /// Reading the input failed while tokenizing.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Writing the token stream failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// Writing diagnostics failed.
    #[error(transparent)]
    Diagnostic(#[from] DiagnosticError),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

//! Error types for the toka lexer.

use std::io;

use thiserror::Error;
use toka_util::Span;

/// Error produced while tokenizing.
///
/// Both variants end the tokenizing session; clean end of input is not an
/// error and is reported as `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum LexError {
    /// A character that starts no token
    #[error("unexpected character '{}' at {}", .ch.escape_debug(), .span)]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Where it was read
        span: Span,
    },

    /// The character source failed or produced malformed UTF-8
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl LexError {
    /// Returns true for errors in the input text rather than in reading it.
    pub fn is_lexical(&self) -> bool {
        matches!(self, LexError::UnexpectedChar { .. })
    }

    /// Location of a lexical error.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnexpectedChar { span, .. } => Some(*span),
            LexError::Io(_) => None,
        }
    }
}

/// Error building a [`RecognitionTable`](crate::RecognitionTable).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Two entries share a spelling
    #[error("duplicate spelling `{0}` in recognition table")]
    DuplicateSpelling(&'static str),

    /// An entry has an empty spelling
    #[error("empty spelling in recognition table")]
    EmptySpelling,
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;

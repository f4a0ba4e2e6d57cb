//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its single read primitive
//! ([`Lexer::next_char`]) with one character of pushback, and the dispatch
//! in [`Lexer::next_token`].

use std::io::Read;
use std::iter::FusedIterator;

use toka_util::{DiagnosticBuilder, DiagnosticCode, Handler};
use tracing::{debug, trace, warn};

use crate::error::{LexError, LexResult};
use crate::source::CharSource;
use crate::table::RecognitionTable;
use crate::token::Token;
use crate::unicode::{is_ident_start, is_number_digit, is_whitespace};

/// Streaming lexer for toka source text.
///
/// The lexer pulls characters from its source on demand and hands back one
/// token per [`next_token`](Lexer::next_token) call. It never holds more
/// than one character of lookahead.
pub struct Lexer<'a, R> {
    /// Character source for the input stream.
    source: CharSource<R>,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    /// Spelling to token kind mapping.
    pub(super) table: &'a RecognitionTable,

    /// Character owed back to the stream, replayed by the next read.
    pushback: Option<char>,

    /// Set once the source reported end-of-input and nothing is pushed back.
    exhausted: bool,

    /// Set after a lexical or I/O error; the lexer produces nothing further.
    failed: bool,
}

impl<'a, R: Read> Lexer<'a, R> {
    /// Creates a new lexer over `reader` using the standard recognition table.
    pub fn new(reader: R, handler: &'a Handler) -> Self {
        Self::with_table(reader, handler, RecognitionTable::global())
    }

    /// Creates a new lexer over `reader` with an explicit recognition table.
    pub fn with_table(reader: R, handler: &'a Handler, table: &'a RecognitionTable) -> Self {
        Self {
            source: CharSource::new(reader),
            handler,
            table,
            pushback: None,
            exhausted: false,
            failed: false,
        }
    }

    /// Returns true if a subsequent [`next_token`](Self::next_token) call can
    /// still produce a token.
    ///
    /// A pending pushback always counts as more input, even after the
    /// source has reported end-of-input.
    pub fn has_more(&self) -> bool {
        !self.failed && !self.exhausted
    }

    /// Reads one character, replaying the pushback slot first.
    ///
    /// Returns `Ok(None)` at end of input and latches exhaustion.
    pub fn next_char(&mut self) -> LexResult<Option<char>> {
        if let Some(c) = self.pushback.take() {
            return Ok(Some(c));
        }

        match self.source.read_char() {
            Ok(Some(c)) => Ok(Some(c)),
            Ok(None) => {
                if !self.exhausted {
                    debug!(offset = self.source.position(), "input exhausted");
                    self.exhausted = true;
                }
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, offset = self.source.position(), "input read failed");
                self.failed = true;
                Err(LexError::Io(e))
            }
        }
    }

    /// Returns `c` to the stream so the next [`next_char`](Self::next_char)
    /// call yields it again.
    ///
    /// At most one character may be outstanding; pushing back twice without
    /// a read in between is a bug in the caller.
    pub fn push_back(&mut self, c: char) {
        debug_assert!(
            self.pushback.is_none(),
            "push_back({:?}) with {:?} already pending",
            c,
            self.pushback
        );
        self.pushback = Some(c);
        self.exhausted = false;
    }

    /// Skips whitespace and returns the first significant character, or
    /// `None` if the input ran out first.
    pub fn skip_whitespace(&mut self) -> LexResult<Option<char>> {
        while let Some(c) = self.next_char()? {
            if !is_whitespace(c) {
                return Ok(Some(c));
            }
        }
        Ok(None)
    }

    /// Returns the next token from the input.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))` for each token
    /// - `Ok(None)` once the input is exhausted, and on every call after an error
    /// - `Err(LexError::UnexpectedChar)` for a character that starts no token;
    ///   a diagnostic is emitted to the handler and lexing stops
    /// - `Err(LexError::Io)` if the source fails
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        if !self.has_more() {
            return Ok(None);
        }

        let result = self.scan_token();
        match &result {
            Ok(Some(token)) => trace!(%token, "token"),
            Ok(None) => {}
            Err(_) => self.failed = true,
        }
        result
    }

    fn scan_token(&mut self) -> LexResult<Option<Token>> {
        let first = match self.skip_whitespace()? {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match first {
            c if is_ident_start(c) => self.lex_identifier(c)?,
            c if is_number_digit(c) => self.lex_number(c)?,
            '=' => self.lex_equals()?,
            c => self.lex_symbol(c)?,
        };
        Ok(Some(token))
    }

    /// Reports `ch` as a character that starts no token.
    ///
    /// Emits a diagnostic at the character's position and returns the
    /// matching error.
    pub(super) fn unexpected_char(&self, ch: char) -> LexError {
        let span = self.source.last_span();
        DiagnosticBuilder::error(format!("unexpected character '{}'", ch.escape_debug()))
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(span)
            .note("tokenizing stops at the first unrecognized character")
            .emit(self.handler);
        debug!(?ch, line = span.line, column = span.column, "lexical error");
        LexError::UnexpectedChar { ch, span }
    }

    /// Returns the line of the next character read from the source (1-based).
    pub fn line(&self) -> u32 {
        self.source.line()
    }

    /// Returns the column of the next character read from the source (1-based).
    pub fn column(&self) -> u32 {
        self.source.column()
    }

    /// Returns the byte offset of the next character read from the source.
    pub fn position(&self) -> usize {
        self.source.position()
    }
}

impl<'a> Lexer<'a, &'a [u8]> {
    /// Creates a lexer over in-memory text.
    pub fn from_text(text: &'a str, handler: &'a Handler) -> Self {
        Self::new(text.as_bytes(), handler)
    }
}

impl<R: Read> Iterator for Lexer<'_, R> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<R: Read> FusedIterator for Lexer<'_, R> {}

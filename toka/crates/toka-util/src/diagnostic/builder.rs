//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// Builds a [`Diagnostic`] step by step, then emits it to a [`Handler`].
///
/// ```
/// use toka_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character '#'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(4, 5, 1, 5))
///     .note("tokenizing stops here")
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug)]
#[must_use = "nothing is reported until `emit` is called"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts an error with no location.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(Level::Error, message)
    }

    /// Starts a warning with no location.
    ///
    /// Nothing in the lexer emits warnings; this is for other users of the
    /// diagnostic API.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(Level::Warning, message)
    }

    fn with_level(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, Span::DUMMY),
        }
    }

    /// Attaches a code such as `E1001`.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Points the diagnostic at `span`.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Appends a note line.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Returns the finished diagnostic without reporting it.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Reports the finished diagnostic to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit(self.diagnostic);
    }
}

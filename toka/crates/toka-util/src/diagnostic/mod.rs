//! Diagnostics: what went wrong, where, and how to print it.
//!
//! The lexer reports problems by emitting a [`Diagnostic`] into a shared
//! [`Handler`]; the driver renders whatever was collected once the run is
//! over.
//!
//! ```
//! use toka_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '$'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! let mut out = Vec::new();
//! handler.render_to("<stdin>", &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "error[E1001]: unexpected character '$'\n --> <stdin>:1:1\n"
//! );
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::RefCell;
use std::fmt::Write as _;
use std::io;

use crate::error::DiagnosticResult;
use crate::span::Span;

/// A single reported problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// One-line description
    pub message: String,
    /// Location, or [`Span::DUMMY`] if there is none
    pub span: Span,
    /// Stable code, if assigned
    pub code: Option<DiagnosticCode>,
    /// Extra context lines
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with no code and no notes.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Renders the diagnostic without a trailing newline.
    ///
    /// `origin` names the input (a path or `<stdin>`); the location line is
    /// left out when the span is [`Span::DUMMY`].
    ///
    /// ```
    /// use toka_util::{DiagnosticBuilder, DiagnosticCode, Span};
    ///
    /// let diag = DiagnosticBuilder::error("unexpected character '&'")
    ///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
    ///     .span(Span::new(2, 3, 1, 3))
    ///     .note("tokenizing stopped here")
    ///     .build();
    ///
    /// assert_eq!(
    ///     diag.render("main.tk"),
    ///     "error[E1001]: unexpected character '&'\n --> main.tk:1:3\n  = note: tokenizing stopped here"
    /// );
    /// ```
    pub fn render(&self, origin: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_rendered(origin, &mut out);
        out
    }

    fn write_rendered(&self, origin: &str, out: &mut String) -> std::fmt::Result {
        write!(out, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(out, "[{}]", code)?;
        }
        write!(out, ": {}", self.message)?;
        if !self.span.is_dummy() {
            write!(out, "\n --> {}:{}", origin, self.span)?;
        }
        for note in &self.notes {
            write!(out, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}

/// Collects diagnostics emitted during a run.
///
/// Emitting takes `&self`, so the lexer and its caller can share one
/// handler by reference.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `diagnostic`.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// A copy of everything recorded so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Writes every recorded diagnostic to `out`, each followed by a
    /// newline, then flushes.
    pub fn render_to<W: io::Write>(&self, origin: &str, out: &mut W) -> DiagnosticResult<()> {
        for diagnostic in self.diagnostics.borrow().iter() {
            writeln!(out, "{}", diagnostic.render(origin))?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_minimal() {
        let diag = Diagnostic::new(Level::Warning, "odd input", Span::DUMMY);
        assert_eq!(diag.render("<stdin>"), "warning: odd input");
    }

    #[test]
    fn test_render_location_without_code() {
        let diag = Diagnostic::error("bad", Span::point(0, 4, 2));
        assert_eq!(diag.render("a.tk"), "error: bad\n --> a.tk:4:2");
    }

    #[test]
    fn test_render_several_notes() {
        let diag = DiagnosticBuilder::error("bad").note("one").note("two").build();
        assert_eq!(diag.render("x"), "error: bad\n  = note: one\n  = note: two");
    }

    #[test]
    fn test_empty_handler() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_warnings_are_not_errors() {
        let handler = Handler::new();
        handler.emit(Diagnostic::new(Level::Warning, "w", Span::DUMMY));
        assert!(!handler.has_errors());
        handler.emit(Diagnostic::error("e", Span::DUMMY));
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].message, "w");
    }

    #[test]
    fn test_render_to_in_order() {
        let handler = Handler::new();
        handler.emit(Diagnostic::error("first", Span::point(0, 1, 1)));
        handler.emit(Diagnostic::error("second", Span::DUMMY));

        let mut out = Vec::new();
        handler.render_to("in.tk", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: first\n --> in.tk:1:1\nerror: second\n"
        );
    }

    #[test]
    fn test_render_to_write_failure() {
        struct Closed;

        impl io::Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let handler = Handler::new();
        handler.emit(Diagnostic::error("lost", Span::DUMMY));
        assert!(handler.render_to("x", &mut Closed).is_err());
    }
}

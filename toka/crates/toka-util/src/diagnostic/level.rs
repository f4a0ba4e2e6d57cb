//! Diagnostic severity.

use std::fmt;

/// How serious a diagnostic is.
///
/// ```
/// use toka_util::Level;
///
/// assert_eq!(Level::Error.to_string(), "error");
/// assert!(!Level::Warning.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Tokenizing cannot continue
    Error,
    /// Reported, but the token stream is unaffected
    ///
    /// The lexer itself never warns; this level exists for callers of the
    /// diagnostic API and is what [`Handler::error_count`](crate::Handler::error_count)
    /// filters out.
    Warning,
}

impl Level {
    /// Returns true for [`Level::Error`].
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Level::Error)
    }

    /// Lowercase label used when rendering.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

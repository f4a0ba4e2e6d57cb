//! toka-util - Diagnostics and Source Locations
//!
//! This crate provides the foundation types shared by the toka lexer and its
//! driver:
//!
//! - [`span`] - Source locations (byte offsets plus line/column)
//! - [`diagnostic`] - Error and warning reporting: [`Diagnostic`],
//!   [`DiagnosticBuilder`], [`DiagnosticCode`], [`Level`] and the collecting
//!   [`Handler`]
//! - [`error`] - Error types for the diagnostic layer itself
//!
//! # Example
//!
//! ```
//! use toka_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '&'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(2, 3, 1, 3))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].render("<stdin>"),
//!     "error[E1001]: unexpected character '&'\n --> <stdin>:1:3"
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;

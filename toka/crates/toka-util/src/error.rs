//! Core error types for toka-util crate
//!
//! This module defines error types used by the diagnostic layer.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Writing rendered diagnostics to their destination failed
    #[error("Failed to write diagnostics: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

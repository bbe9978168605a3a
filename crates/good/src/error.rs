//! Error types for GOOD operations.
//!
//! This module provides the main error type [`GoodError`]. Building a scene
//! never fails; errors come from reading network descriptions, validating
//! them on request, resolving configuration and exporting.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for GOOD operations.
///
/// The `Parse` variant keeps the source text and the byte span reported by
/// the TOML decoder so that callers can point at the offending input.
#[derive(Debug, Error)]
pub enum GoodError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Invalid specification: {0}")]
    InvalidSpecification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for GoodError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl GoodError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}

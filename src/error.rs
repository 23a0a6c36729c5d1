//! Error handling for linebroad
//!
//! Table-lookup failures are not errors: they are ordinary outcomes
//! ([`crate::tables::TableLookup`]) that select a fallback broadening theory.
//! The variants below cover invalid inputs, numeric domain violations and the
//! file I/O of the command-line harness.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for linebroad operations
pub type Result<T> = std::result::Result<T, BroadeningError>;

/// Main error type for broadening operations
#[derive(Error, Debug)]
pub enum BroadeningError {
    // Numeric Errors
    #[error("Numeric domain violation: {quantity} = {value} ({context})")]
    NumericDomain {
        quantity: &'static str,
        value: f64,
        context: String,
    },

    // Input Errors
    #[error("Atmosphere model has no depth layers")]
    EmptyAtmosphere,

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Line {index} ({wavelength:.3} Å) failed: {source}")]
    LineFailed {
        index: usize,
        wavelength: f64,
        #[source]
        source: Box<BroadeningError>,
    },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read file: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BroadeningError {
    /// Shorthand for a [`BroadeningError::NumericDomain`] error.
    pub fn domain(quantity: &'static str, value: f64, context: impl Into<String>) -> Self {
        BroadeningError::NumericDomain {
            quantity,
            value,
            context: context.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            BroadeningError::NumericDomain { .. } => "NUMERIC_DOMAIN",
            BroadeningError::EmptyAtmosphere => "EMPTY_ATMOSPHERE",
            BroadeningError::InvalidConfig { .. } => "INVALID_CONFIG",
            BroadeningError::LineFailed { .. } => "LINE_FAILED",
            BroadeningError::FileNotFound { .. } => "FILE_NOT_FOUND",
            BroadeningError::FileRead { .. } => "FILE_READ_ERROR",
            BroadeningError::FileWrite { .. } => "FILE_WRITE_ERROR",
            BroadeningError::Io(_) => "IO_ERROR",
            BroadeningError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// A failing line can be dropped from the list and the batch rerun; a bad
    /// atmosphere or configuration cannot.
    pub fn is_recoverable(&self) -> bool {
        match self {
            BroadeningError::NumericDomain { .. } => true,
            BroadeningError::LineFailed { source, .. } => source.is_recoverable(),
            BroadeningError::FileNotFound { .. } => true,
            _ => false,
        }
    }

    /// Index of the failing line, if this error wraps a per-line failure.
    pub fn line_index(&self) -> Option<usize> {
        match self {
            BroadeningError::LineFailed { index, .. } => Some(*index),
            _ => None,
        }
    }
}

//! # Error Types
//!
//! This module defines error types used throughout the savanna library.
//!
//! Drawing never fails: out-of-range coordinates are clipped. The only
//! user-facing failure of the imaging core is asking for an empty canvas.

use thiserror::Error;

/// Main error type for savanna operations
#[derive(Debug, Error)]
pub enum SavannaError {
    /// Canvas dimensions are zero or too large to allocate
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// No scene registered under the requested name
    #[error("Unknown scene '{0}'")]
    UnknownScene(String),

    /// The zlib stream for IDAT could not be produced
    #[error("Compression failed: {0}")]
    Compression(#[source] std::io::Error),

    /// Malformed PNG stream (truncated chunk, bad signature)
    #[error("Format error: {0}")]
    Format(String),

    /// Unreadable or invalid configuration file
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

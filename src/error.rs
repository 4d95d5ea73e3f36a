//! # Error Types
//!
//! This module defines error types used throughout the sello library.

use thiserror::Error;

/// Main error type for sello operations
#[derive(Debug, Error)]
pub enum SelloError {
    /// Drawing surface configuration errors (zero dimensions)
    #[error("Canvas error: {0}")]
    Canvas(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Invalid request parameter (shape, color, dimensions)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Server-level errors (bind, accept)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

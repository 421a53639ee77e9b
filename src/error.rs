//! Error types for radstack operations.
//!
//! This module defines [`RadstackError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.

use thiserror::Error;

/// Core error type for radstack operations.
#[derive(Debug, Error)]
pub enum RadstackError {
    /// Shell command could not be spawned or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for radstack operations.
pub type Result<T> = std::result::Result<T, RadstackError>;

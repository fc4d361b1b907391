/*!
 * Error types for the voxscript application.
 *
 * This module contains custom error types for the host layer (CLI, file
 * handling, configuration), using the thiserror crate for ergonomic error
 * definitions.
 *
 * The formatting pipeline itself is total over its input domain and has no
 * error surface; every error here belongs to the caller side of the engine.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Main application error type for the CLI host
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The transcript is empty or whitespace-only after markup removal.
    /// The engine is never invoked in this case; the host surfaces this
    /// message instead.
    #[error("Nothing to format: transcript is empty")]
    EmptyTranscript,

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

//! Error type for the fallible edges (config, journal store, API input)
//!
//! Text analysis itself is total and never returns these.

use std::io;
use thiserror::Error;

/// Errors raised outside the pure analysis path
#[derive(Debug, Error)]
pub enum ManoError {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A journal or config file did not contain valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration values were unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller input was rejected before analysis
    #[error("Validation error: {0}")]
    Validation(String),

    /// No live session with this id
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

/// Shorthand result alias
pub type Result<T> = std::result::Result<T, ManoError>;

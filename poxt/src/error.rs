//! Error handling module for the poxt CLI.

use poxc_lex::LexError;
use thiserror::Error;

/// Main error type for the poxt CLI application.
#[derive(Error, Debug)]
pub enum PoxtError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The source text could not be tokenized.
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PoxtError.
pub type Result<T> = std::result::Result<T, PoxtError>;

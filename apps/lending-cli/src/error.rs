//! # CLI Error Type
//!
//! Errors that end a session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Session Loop                       │
//! │                                                                         │
//! │  CoreError (NotAvailable, NotBorrowed, ...)                            │
//! │      └──► printed as a status line, loop continues                     │
//! │                                                                         │
//! │  CliError::EndOfInput                                                   │
//! │      └──► session ends cleanly (same as command 0)                     │
//! │                                                                         │
//! │  CliError::{MalformedInteger, Io, Json, Config}                        │
//! │      └──► run() returns Err, process exits non-zero                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal session errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input was expected but the stream is closed.
    #[error("input stream closed")]
    EndOfInput,

    /// A line that should hold an integer did not parse.
    #[error("expected an integer, got {input:?}")]
    MalformedInteger { input: String },

    /// Terminal read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Environment configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

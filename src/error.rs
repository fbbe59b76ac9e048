//! # Error Types
//!
//! This module defines error types used throughout the jetpoke library.

use thiserror::Error;

/// Main error type for jetpoke operations
#[derive(Debug, Error)]
pub enum JetpokeError {
    /// Connection-level errors (unreachable host, refused port, connect timeout)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Transport-level errors (read/write on an established socket)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid command or parameter
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

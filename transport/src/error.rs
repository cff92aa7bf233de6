//! Error types

use thiserror::Error;

/// Transport error type
#[derive(Error, Debug)]
pub enum TransportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection timed out
    #[error("Connection timeout")]
    ConnectionTimeout,

    /// Peer closed the connection
    #[error("Connection closed")]
    ConnectionClosed,
}

/// Transport operation result type
pub type Result<T> = std::result::Result<T, TransportError>;

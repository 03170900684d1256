//! Error types for the Sway IPC adapter

use std::path::PathBuf;
use std::time::Duration;
use swaytalk_application::IpcError;
use thiserror::Error;

/// Result type alias for Sway IPC operations
pub type Result<T> = std::result::Result<T, SwayIpcError>;

/// Errors that can occur when talking to the compositor socket
#[derive(Error, Debug)]
pub enum SwayIpcError {
    #[error("No IPC socket found: set $SWAYSOCK (or $I3SOCK) or [ipc] socket_path")]
    SocketNotFound,

    #[error("Failed to connect to {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IPC I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed IPC message: {0}")]
    Protocol(String),

    #[error("IPC timed out after {0:?}")]
    Timeout(Duration),

    /// The compositor parsed the command and refused it.
    #[error("{0}")]
    Rejected(String),
}

impl From<SwayIpcError> for IpcError {
    fn from(err: SwayIpcError) -> Self {
        match err {
            SwayIpcError::Rejected(detail) => IpcError::Remote(detail),
            SwayIpcError::Timeout(after) => IpcError::Timeout(after),
            SwayIpcError::Protocol(detail) => IpcError::Protocol(detail),
            other => IpcError::Connection(other.to_string()),
        }
    }
}

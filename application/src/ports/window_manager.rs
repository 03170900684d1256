//! Window manager port
//!
//! The single outbound side effect of the system: sending one command string
//! to the compositor's control socket.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors reported by a window manager adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpcError {
    /// The compositor received the command and rejected it.
    #[error("{0}")]
    Remote(String),

    #[error("IPC timed out after {0:?}")]
    Timeout(Duration),

    #[error("IPC connection error: {0}")]
    Connection(String),

    #[error("IPC protocol error: {0}")]
    Protocol(String),
}

/// Port for issuing commands to the window manager.
///
/// Implementations must bound every call with a timeout and serialize access
/// to the underlying socket.
#[async_trait]
pub trait WindowManagerPort: Send + Sync {
    /// Send one newline-free command; `Ok(())` is the compositor's acknowledgement.
    async fn run_command(&self, command: &str) -> Result<(), IpcError>;
}

//! Window manager that records commands instead of sending them.

use async_trait::async_trait;
use std::sync::Mutex;
use swaytalk_application::{IpcError, WindowManagerPort};
use tracing::info;

/// Acknowledges every command and keeps a log of what would have been sent.
#[derive(Debug, Default)]
pub struct DryRunWindowManager {
    commands: Mutex<Vec<String>>,
}

impl DryRunWindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl WindowManagerPort for DryRunWindowManager {
    async fn run_command(&self, command: &str) -> Result<(), IpcError> {
        info!(command, "Dry run: command not sent");
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command.to_string());
        }
        Ok(())
    }
}

//! Window manager IPC configuration from TOML (`[ipc]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use swaytalk_domain::{ConfigIssue, ConfigIssueCode};

/// IPC configuration from TOML
///
/// # Example
///
/// ```toml
/// [ipc]
/// socket_path = "/run/user/1000/sway-ipc.1000.1234.sock"  # default: $SWAYSOCK, then $I3SOCK
/// timeout_secs = 5
/// dry_run = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIpcConfig {
    /// Control socket path (overrides the environment)
    pub socket_path: Option<PathBuf>,
    /// Bound on each command exchange
    pub timeout_secs: u64,
    /// Record commands instead of sending them
    pub dry_run: bool,
}

impl Default for FileIpcConfig {
    fn default() -> Self {
        Self {
            socket_path: None,
            timeout_secs: 5,
            dry_run: false,
        }
    }
}

impl FileIpcConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "ipc.timeout_secs".to_string(),
                },
                "ipc.timeout_secs must be greater than 0",
            ));
        }
        issues
    }
}

//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration from TOML
///
/// # Example
///
/// ```toml
/// [logging]
/// file_dir = "~/.local/state/swaytalk"
/// transcript_path = "~/.local/state/swaytalk/transcript.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rolling diagnostic logs
    pub file_dir: Option<PathBuf>,
    /// JSONL transcript file
    pub transcript_path: Option<PathBuf>,
}

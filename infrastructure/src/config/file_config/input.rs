//! Input capture configuration from TOML (`[input]` section)

use serde::{Deserialize, Serialize};

/// Input configuration from TOML
///
/// # Example
///
/// ```toml
/// [input]
/// launcher = "fuzzel -d -p '> '"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputConfig {
    /// dmenu-style command whose stdout is the request
    pub launcher: Option<String>,
}

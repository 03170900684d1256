//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types once
//! validated.

mod input;
mod ipc;
mod logging;
mod model;
mod session;

pub use input::FileInputConfig;
pub use ipc::FileIpcConfig;
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use session::FileSessionConfig;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use swaytalk_application::SessionConfig;
use swaytalk_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model server and sampling
    pub model: FileModelConfig,
    /// Agent loop settings
    pub session: FileSessionConfig,
    /// Window manager socket
    pub ipc: FileIpcConfig,
    /// Input capture
    pub input: FileInputConfig,
    /// Diagnostic log and transcript files
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.validate());
        issues.extend(self.session.validate());
        issues.extend(self.ipc.validate());
        issues
    }

    /// Build the agent loop parameters (invalid values fall back to defaults).
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_model(self.model.parse_model().0)
            .with_max_turns(self.session.max_turns)
            .with_describe_policy(self.session.parse_describe_policy().0)
            .with_command_stubs(self.session.expose_command_stubs)
            .with_model_timeout(Duration::from_secs(self.model.timeout_secs))
    }

    pub fn ipc_timeout(&self) -> Duration {
        Duration::from_secs(self.ipc.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaytalk_domain::DescribePolicy;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
name = "qwen2.5:7b"
base_url = "http://gpu-box:11434"
temperature = 0.2

[session]
max_turns = 4
describe_policy = "advisory"
expose_command_stubs = false

[ipc]
socket_path = "/tmp/sway.sock"
dry_run = true

[input]
launcher = "fuzzel -d -p '> '"

[logging]
transcript_path = "/tmp/swaytalk.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.name, "qwen2.5:7b");
        assert_eq!(config.model.base_url, "http://gpu-box:11434");
        assert_eq!(config.session.max_turns, 4);
        assert!(config.ipc.dry_run);
        assert_eq!(config.ipc.timeout_secs, 5);
        assert_eq!(config.input.launcher.as_deref(), Some("fuzzel -d -p '> '"));
        assert!(config.logging.file_dir.is_none());

        let session = config.session_config();
        assert_eq!(session.model.as_str(), "qwen2.5:7b");
        assert_eq!(session.max_turns, 4);
        assert_eq!(session.describe_policy, DescribePolicy::Advisory);
        assert!(!session.expose_command_stubs);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[session]
max_turns = 3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.max_turns, 3);
        // Defaults should apply
        assert_eq!(config.model, FileModelConfig::default());
        assert!(config.session.expose_command_stubs);
        assert_eq!(config.ipc_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let toml_str = r#"
[model]
timeout_secs = 0

[session]
max_turns = 0

[ipc]
timeout_secs = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let errors = config.validate().into_iter().filter(|i| i.is_error()).count();
        assert_eq!(errors, 3);
    }
}

//! Model configuration from TOML (`[model]` section)

use serde::{Deserialize, Serialize};
use swaytalk_domain::{ConfigIssue, ConfigIssueCode, Model};

/// Model configuration from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// name = "mistral-nemo"
/// base_url = "http://localhost:11434"
/// temperature = 0.0
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Ollama model tag
    pub name: String,
    /// Ollama server URL
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Bound on each model request
    pub timeout_secs: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::DEFAULT.to_string(),
            base_url: "http://localhost:11434".to_string(),
            temperature: 0.0,
            timeout_secs: 60,
        }
    }
}

impl FileModelConfig {
    /// Parse the model name, falling back to the default on error.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        match self.name.parse::<Model>() {
            Ok(model) => (model, Vec::new()),
            Err(_) => (
                Model::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: "model.name".to_string(),
                    },
                    "model.name: model name cannot be empty",
                )],
            ),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_model().1;

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "model.timeout_secs".to_string(),
                },
                "model.timeout_secs must be greater than 0",
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "model.temperature".to_string(),
                },
                format!(
                    "model.temperature: {} is outside 0.0..=2.0",
                    self.temperature
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileModelConfig::default();
        assert_eq!(config.name, "mistral-nemo");
        assert_eq!(config.temperature, 0.0);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_name_is_error() {
        let config = FileModelConfig {
            name: "  ".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Model::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_hot_temperature_warns() {
        let config = FileModelConfig {
            temperature: 3.5,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}

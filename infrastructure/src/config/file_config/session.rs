//! Agent loop configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use swaytalk_domain::{ConfigIssue, ConfigIssueCode, DescribePolicy};

/// Agent loop configuration from TOML
///
/// # Example
///
/// ```toml
/// [session]
/// max_turns = 8
/// describe_policy = "enforced"   # or "advisory"
/// expose_command_stubs = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Maximum tool-result round-trips per session
    pub max_turns: usize,
    /// "enforced" or "advisory"
    pub describe_policy: String,
    /// List one stub tool per catalog command
    pub expose_command_stubs: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            max_turns: 8,
            describe_policy: DescribePolicy::default().to_string(),
            expose_command_stubs: true,
        }
    }
}

impl FileSessionConfig {
    /// Parse the describe policy, falling back to `enforced` on error.
    pub fn parse_describe_policy(&self) -> (DescribePolicy, Vec<ConfigIssue>) {
        match self.describe_policy.parse::<DescribePolicy>() {
            Ok(policy) => (policy, Vec::new()),
            Err(_) => (
                DescribePolicy::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "session.describe_policy".to_string(),
                        value: self.describe_policy.clone(),
                        valid_values: vec!["enforced".to_string(), "advisory".to_string()],
                    },
                    format!(
                        "session.describe_policy: unknown value '{}', falling back to 'enforced'",
                        self.describe_policy
                    ),
                )],
            ),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (policy, mut issues) = self.parse_describe_policy();

        if self.max_turns == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "session.max_turns".to_string(),
                },
                "session.max_turns must be greater than 0",
            ));
        }

        if !policy.is_enforced() && !self.expose_command_stubs {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::AdvisoryWithoutStubs,
                "session: advisory policy with expose_command_stubs = false relies on the prompt alone",
            ));
        }

        issues
    }
}

//! Describe-before-execute policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether `execute_code` requires a prior `get_docstring` for the same
/// command within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescribePolicy {
    /// Executing an undescribed command returns `NotDescribedYet`.
    #[default]
    Enforced,
    /// The agent is only instructed to describe first.
    Advisory,
}

impl DescribePolicy {
    pub fn is_enforced(&self) -> bool {
        matches!(self, DescribePolicy::Enforced)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DescribePolicy::Enforced => "enforced",
            DescribePolicy::Advisory => "advisory",
        }
    }
}

impl fmt::Display for DescribePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DescribePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enforced" | "strict" => Ok(DescribePolicy::Enforced),
            "advisory" | "loose" => Ok(DescribePolicy::Advisory),
            other => Err(format!(
                "unknown describe policy '{}' (expected 'enforced' or 'advisory')",
                other
            )),
        }
    }
}

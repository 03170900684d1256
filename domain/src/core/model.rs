//! Model value object representing the language model behind a session

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the model the agent runs on (Value Object).
///
/// The name is passed through to the model server verbatim
/// (e.g. "mistral-nemo", "llama3.1:8b").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    /// Model used when nothing is configured
    pub const DEFAULT: &'static str = "mistral-nemo";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("model name cannot be empty".to_string());
        }
        Ok(Self::new(trimmed))
    }
}

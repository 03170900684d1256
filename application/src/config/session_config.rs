//! Session parameters — use case loop control.
//!
//! [`SessionConfig`] groups the static parameters that control the agent
//! loop in [`RunSessionUseCase`](crate::use_cases::run_session::RunSessionUseCase).

use serde::{Deserialize, Serialize};
use std::time::Duration;
use swaytalk_domain::{DescribePolicy, Model};

/// Agent loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Model that proposes tool calls.
    pub model: Model,
    /// Maximum tool-result round-trips after the initial request.
    pub max_turns: usize,
    /// Whether `execute_code` requires a prior `get_docstring`.
    pub describe_policy: DescribePolicy,
    /// List one argument-less stub tool per catalog command.
    pub expose_command_stubs: bool,
    /// Bound on each model request.
    pub model_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_turns: 8,
            describe_policy: DescribePolicy::Enforced,
            expose_command_stubs: true,
            model_timeout: Duration::from_secs(60),
        }
    }
}

impl SessionConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_describe_policy(mut self, policy: DescribePolicy) -> Self {
        self.describe_policy = policy;
        self
    }

    pub fn with_command_stubs(mut self, expose: bool) -> Self {
        self.expose_command_stubs = expose;
        self
    }

    pub fn with_model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = timeout;
        self
    }
}

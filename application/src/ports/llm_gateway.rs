//! LLM Gateway port
//!
//! Defines the interface for communicating with the model that proposes tool
//! calls.

use async_trait::async_trait;
use swaytalk_domain::{LlmResponse, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The model answered, but the answer could not be understood
    /// (e.g. tool arguments that are not a JSON object).
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Result of one tool call, sent back to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResultMessage {
    /// ID of the tool call this answers
    pub tool_use_id: String,
    pub tool_name: String,
    /// Text the model reads
    pub output: String,
    pub is_error: bool,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session holding the conversation so far
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a user message along with the tool schemas the model may call.
    ///
    /// The tools stay registered for the rest of the session.
    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError>;

    /// Send the results of the previous response's tool calls.
    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError>;
}

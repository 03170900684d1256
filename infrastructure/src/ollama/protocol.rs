//! Wire types for the Ollama `/api/chat` endpoint.
//!
//! Requests carry the whole conversation (the API is stateless) plus the
//! tool schemas in OpenAI function format. Responses carry one assistant
//! message whose `tool_calls` are converted into [`ContentBlock::ToolUse`]
//! blocks with synthesized IDs.

use super::error::{OllamaError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use swaytalk_application::ToolResultMessage;
use swaytalk_domain::{ContentBlock, LlmResponse, StopReason};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<WireToolCall>,
    /// Name of the tool a `tool` message answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
}

impl ChatMessage {
    fn plain(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::plain(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(Role::User, content)
    }

    /// The reply to one tool call.
    pub fn tool_result(result: &ToolResultMessage) -> Self {
        Self {
            tool_name: Some(result.tool_name.clone()),
            ..Self::plain(Role::Tool, result.output.clone())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    pub function: WireFunction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunction {
    #[serde(default)]
    pub name: String,
    /// Usually an object; some models send a JSON-encoded string
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Serialize)]
pub struct ChatOptions {
    pub temperature: f64,
}

/// Body of `POST /api/chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "no_tools")]
    pub tools: &'a [Value],
    pub stream: bool,
    pub options: ChatOptions,
}

fn no_tools(tools: &&[Value]) -> bool {
    tools.is_empty()
}

/// Non-streaming `/api/chat` response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub message: ChatMessage,
    #[serde(default)]
    pub done_reason: Option<String>,
}

/// Error body returned alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ChatResponse {
    /// Convert into the domain response, failing on unparsable tool arguments.
    pub fn to_llm_response(&self) -> Result<LlmResponse> {
        let mut content = Vec::new();
        if !self.message.content.trim().is_empty() {
            content.push(ContentBlock::Text(self.message.content.clone()));
        }

        for (i, call) in self.message.tool_calls.iter().enumerate() {
            content.push(ContentBlock::ToolUse {
                id: format!("call_{}", i),
                name: call.function.name.clone(),
                input: parse_arguments(&call.function.name, &call.function.arguments)?,
            });
        }

        let stop_reason = if self.message.tool_calls.is_empty() {
            match self.done_reason.as_deref() {
                None | Some("stop") => StopReason::EndTurn,
                Some("length") => StopReason::MaxTokens,
                Some(other) => StopReason::Other(other.to_string()),
            }
        } else {
            StopReason::ToolUse
        };

        Ok(LlmResponse {
            content,
            stop_reason: Some(stop_reason),
            model: self.model.clone(),
        })
    }
}

/// Interpret a tool call's `arguments` value as an argument object.
pub fn parse_arguments(tool: &str, arguments: &Value) -> Result<HashMap<String, Value>> {
    match arguments {
        Value::Null => Ok(HashMap::new()),
        Value::Object(map) => Ok(map.clone().into_iter().collect()),
        Value::String(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(map.into_iter().collect()),
            _ => Err(OllamaError::InvalidResponse(format!(
                "arguments for '{}' are not a JSON object: {}",
                tool, raw
            ))),
        },
        other => Err(OllamaError::InvalidResponse(format!(
            "arguments for '{}' are not a JSON object: {}",
            tool, other
        ))),
    }
}

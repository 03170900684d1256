//! Structured model responses.
//!
//! A response is a list of content blocks mixing text and tool-use requests.
//! The session loop keeps going while responses carry tool calls and stops at
//! the first response that has none.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block of content within an LLM response.
///
/// Chat APIs with native tool calling return a message whose text and tool
/// calls are modeled here as an ordered list of blocks.
///
/// # Examples
///
/// ```
/// use swaytalk_domain::session::response::ContentBlock;
///
/// let text = ContentBlock::Text("Looking up the focus grammar.".to_string());
/// assert!(text.as_text().is_some());
///
/// let tool = ContentBlock::ToolUse {
///     id: "call_0".to_string(),
///     name: "get_docstring".to_string(),
///     input: [("tool_name".to_string(), serde_json::json!("focus"))]
///         .into_iter().collect(),
/// };
/// assert!(tool.as_tool_use().is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A text content block from the model.
    Text(String),

    /// A tool use request from the model.
    ///
    /// Providers that do not assign call IDs get a synthesized one so results
    /// can still be correlated.
    ToolUse {
        /// Call ID for correlating with tool results (e.g. "call_0").
        id: String,
        /// Tool name as proposed by the model (may be an alias or unknown).
        name: String,
        /// Arguments object.
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `(id, name, input)` if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
///
/// Informational: the session loop decides on [`LlmResponse::has_tool_calls`]
/// because local models often report `stop` even when they call tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response — the model is done.
    EndTurn,
    /// The model wants to call tools — execute them and return results.
    ToolUse,
    /// Hit the token limit — response may be truncated.
    MaxTokens,
    /// Provider-specific stop reason.
    Other(String),
}

/// A structured response from an LLM, supporting both text and tool use.
///
/// # Helper Methods
///
/// - [`text_content()`](Self::text_content) — concatenate all text blocks
/// - [`tool_calls()`](Self::tool_calls) — extract tool use blocks as `Vec<ToolCall>`
/// - [`has_tool_calls()`](Self::has_tool_calls) — quick check for tool use
/// - [`from_text()`](Self::from_text) — wrap a plain string
///
/// # Examples
///
/// ```
/// use swaytalk_domain::session::response::{LlmResponse, ContentBlock, StopReason};
///
/// // Final answer
/// let response = LlmResponse::from_text("Done.");
/// assert_eq!(response.text_content(), "Done.");
/// assert!(!response.has_tool_calls());
///
/// // Response with tool use
/// let response = LlmResponse {
///     content: vec![ContentBlock::ToolUse {
///         id: "call_0".to_string(),
///         name: "execute_code".to_string(),
///         input: [
///             ("tool_name".to_string(), serde_json::json!("focus")),
///             ("arguments".to_string(), serde_json::json!("next")),
///         ]
///         .into_iter().collect(),
///     }],
///     stop_reason: Some(StopReason::ToolUse),
///     model: Some("mistral-nemo".to_string()),
/// };
/// assert!(response.has_tool_calls());
/// assert_eq!(response.tool_calls()[0].get_string("arguments"), Some("next"));
/// ```
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Content blocks in the response (text and/or tool use).
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    pub stop_reason: Option<StopReason>,
    /// Model identifier (if returned by the API).
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only response (for fallback / prompt-based path).
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` content blocks as `Vec<ToolCall>`.
    ///
    /// Each `ToolUse` block is converted to a `ToolCall` with the
    /// `native_id` field set to the block's ID.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if the response contains any tool use requests.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }
}

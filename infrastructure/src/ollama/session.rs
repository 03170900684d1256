//! Ollama session implementation
//!
//! The chat API is stateless, so the session keeps the conversation history
//! locally and resends it with every request.

use super::client::OllamaClient;
use super::protocol::ChatMessage;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use swaytalk_application::{GatewayError, LlmSession, ToolResultMessage};
use swaytalk_domain::{LlmResponse, Model};
use tokio::sync::Mutex;
use tracing::debug;

pub struct OllamaSession {
    client: Arc<OllamaClient>,
    model: Model,
    /// Full conversation history, system prompt first
    messages: Mutex<Vec<ChatMessage>>,
    /// Tool schemas (set when send_with_tools is first called)
    tools: Mutex<Vec<Value>>,
}

impl OllamaSession {
    pub fn new(client: Arc<OllamaClient>, model: Model, system_prompt: Option<&str>) -> Self {
        let messages = system_prompt
            .filter(|p| !p.is_empty())
            .map(|p| vec![ChatMessage::system(p)])
            .unwrap_or_default();

        Self {
            client,
            model,
            messages: Mutex::new(messages),
            tools: Mutex::new(Vec::new()),
        }
    }

    /// Append `outgoing`, call the model and record its reply.
    async fn exchange(&self, outgoing: Vec<ChatMessage>) -> Result<LlmResponse, GatewayError> {
        let tools = self.tools.lock().await;
        let mut messages = self.messages.lock().await;
        messages.extend(outgoing);

        let response = self
            .client
            .chat(self.model.as_str(), &messages, &tools)
            .await?;
        let llm_response = response.to_llm_response()?;

        debug!(
            tool_calls = response.message.tool_calls.len(),
            "Ollama replied"
        );
        messages.push(response.message);

        Ok(llm_response)
    }
}

#[async_trait]
impl LlmSession for OllamaSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send_with_tools(
        &self,
        content: &str,
        tools: &[Value],
    ) -> Result<LlmResponse, GatewayError> {
        if !tools.is_empty() {
            *self.tools.lock().await = tools.to_vec();
        }
        self.exchange(vec![ChatMessage::user(content)]).await
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        let outgoing = results.iter().map(ChatMessage::tool_result).collect();
        self.exchange(outgoing).await
    }
}

//! HTTP client for the Ollama chat endpoint

use super::error::{OllamaError, Result};
use super::protocol::{ChatMessage, ChatOptions, ChatRequest, ChatResponse, ErrorBody};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Thin wrapper around `reqwest` bound to one Ollama server.
#[derive(Debug)]
pub struct OllamaClient {
    base_url: String,
    temperature: f64,
    timeout: Duration,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(base_url: &str, temperature: f64, timeout: Duration) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(OllamaError::Config("ollama base_url cannot be empty".to_string()));
        }
        if timeout.is_zero() {
            return Err(OllamaError::Config(
                "ollama timeout must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.trim().to_string(),
            temperature,
            timeout,
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| OllamaError::Config(e.to_string()))?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One non-streaming chat completion.
    pub async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: &[Value],
    ) -> Result<ChatResponse> {
        let endpoint = format!("{}/api/chat", self.base_url.trim_end_matches('/'));
        let request = ChatRequest {
            model,
            messages,
            tools,
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
            },
        };

        debug!(
            model,
            messages = messages.len(),
            tools = tools.len(),
            "Calling Ollama /api/chat"
        );

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            if status.as_u16() == 404 && detail.contains("not found") {
                return Err(OllamaError::ModelNotFound(model.to_string()));
            }
            return Err(OllamaError::Http {
                status: status.as_u16(),
                body: detail,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            OllamaError::InvalidResponse(format!("failed to parse /api/chat JSON: {}", e))
        })
    }

    fn map_transport_error(&self, error: reqwest::Error) -> OllamaError {
        if error.is_timeout() {
            return OllamaError::Timeout(self.timeout);
        }
        OllamaError::Connection {
            base_url: self.base_url.clone(),
            detail: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_base_url() {
        let err = OllamaClient::new("  ", 0.0, Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, OllamaError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = OllamaClient::new("http://localhost:11434", 0.0, Duration::ZERO).unwrap_err();
        assert!(matches!(err, OllamaError::Config(_)));
    }

    #[test]
    fn test_base_url_trimmed() {
        let client =
            OllamaClient::new(" http://localhost:11434/ ", 0.0, Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:11434/");
    }
}

//! Ollama LLM Gateway implementation

use super::client::OllamaClient;
use super::error::Result;
use super::session::OllamaSession;
use crate::config::FileModelConfig;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use swaytalk_application::{GatewayError, LlmGateway, LlmSession};
use swaytalk_domain::Model;
use tracing::info;

/// LLM Gateway implementation for a local Ollama server
pub struct OllamaGateway {
    client: Arc<OllamaClient>,
}

impl OllamaGateway {
    pub fn new(base_url: &str, temperature: f64, timeout: Duration) -> Result<Self> {
        let client = OllamaClient::new(base_url, temperature, timeout)?;
        info!("OllamaGateway initialized for {}", client.base_url());

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Build from the `[model]` config section.
    pub fn from_config(config: &FileModelConfig) -> Result<Self> {
        Self::new(
            &config.base_url,
            config.temperature.into(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<OllamaClient> {
        &self.client
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OllamaSession::new(
            Arc::clone(&self.client),
            model.clone(),
            Some(system_prompt),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use swaytalk_application::ToolResultMessage;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response per connection and collect request bodies.
    async fn fake_ollama(replies: Vec<(u16, Value)>) -> (String, JoinHandle<Vec<Value>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut bodies = Vec::new();
            for (status, reply) in replies {
                let (mut stream, _) = listener.accept().await.unwrap();
                bodies.push(read_request_body(&mut stream).await);

                let payload = reply.to_string();
                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    payload.len(),
                    payload
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();
            }
            bodies
        });

        (base_url, handle)
    }

    async fn read_request_body(stream: &mut tokio::net::TcpStream) -> Value {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let length = text[..split]
                    .lines()
                    .find_map(|l| {
                        let lower = l.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);
                let body_start = split + 4;
                if buf.len() >= body_start + length {
                    return serde_json::from_slice(&buf[body_start..body_start + length]).unwrap();
                }
            }
            if n == 0 {
                panic!("connection closed before the request body was read");
            }
        }
    }

    #[tokio::test]
    async fn test_session_keeps_history_and_tools() {
        let (base_url, server) = fake_ollama(vec![
            (
                200,
                json!({
                    "model": "mistral-nemo",
                    "message": {
                        "role": "assistant",
                        "content": "",
                        "tool_calls": [{"function": {"name": "get_docstring", "arguments": {"tool_name": "focus"}}}]
                    },
                    "done": true
                }),
            ),
            (
                200,
                json!({
                    "message": {"role": "assistant", "content": "Done."},
                    "done_reason": "stop",
                    "done": true
                }),
            ),
        ])
        .await;

        let gateway = OllamaGateway::new(&base_url, 0.0, Duration::from_secs(5)).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::default(), "system prompt")
            .await
            .unwrap();

        let tools = vec![json!({"type": "function", "function": {"name": "get_docstring"}})];
        let first = session.send_with_tools("focus next", &tools).await.unwrap();
        assert_eq!(first.tool_calls()[0].get_string("tool_name"), Some("focus"));

        let second = session
            .send_tool_results(&[ToolResultMessage {
                tool_use_id: "call_0".into(),
                tool_name: "get_docstring".into(),
                output: "Documentation for focus".into(),
                is_error: false,
            }])
            .await
            .unwrap();
        assert_eq!(second.text_content(), "Done.");

        let bodies = server.await.unwrap();
        assert_eq!(bodies[0]["model"], "mistral-nemo");
        assert_eq!(bodies[0]["messages"].as_array().unwrap().len(), 2);

        // system, user, assistant (tool call), tool result
        let history = bodies[1]["messages"].as_array().unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[2]["role"], "assistant");
        assert_eq!(history[3]["role"], "tool");
        assert_eq!(history[3]["tool_name"], "get_docstring");
        assert_eq!(bodies[1]["tools"], bodies[0]["tools"]);
    }

    #[tokio::test]
    async fn test_missing_model_maps_to_model_not_available() {
        let (base_url, server) = fake_ollama(vec![(
            404,
            json!({"error": "model \"qwen9\" not found, try pulling it first"}),
        )])
        .await;

        let gateway = OllamaGateway::new(&base_url, 0.0, Duration::from_secs(5)).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::new("qwen9"), "system prompt")
            .await
            .unwrap();

        let err = session.send_with_tools("focus next", &[]).await.unwrap_err();
        assert!(matches!(err, GatewayError::ModelNotAvailable(ref m) if m == "qwen9"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let gateway = OllamaGateway::new(&base_url, 0.0, Duration::from_secs(5)).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::default(), "system prompt")
            .await
            .unwrap();

        let err = session.send_with_tools("focus next", &[]).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}

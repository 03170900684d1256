//! Error types for the Ollama adapter

use std::time::Duration;
use swaytalk_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Invalid Ollama configuration: {0}")]
    Config(String),

    #[error("Could not reach Ollama at {base_url}. Ensure 'ollama serve' is running: {detail}")]
    Connection { base_url: String, detail: String },

    #[error("Ollama request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Ollama returned status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid Ollama response: {0}")]
    InvalidResponse(String),
}

impl From<OllamaError> for GatewayError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Connection { .. } => GatewayError::ConnectionError(err.to_string()),
            OllamaError::Timeout(_) => GatewayError::Timeout,
            OllamaError::ModelNotFound(model) => GatewayError::ModelNotAvailable(model),
            OllamaError::Http { .. } => GatewayError::RequestFailed(err.to_string()),
            OllamaError::InvalidResponse(detail) => GatewayError::InvalidResponse(detail),
            OllamaError::Config(detail) => GatewayError::Other(detail),
        }
    }
}

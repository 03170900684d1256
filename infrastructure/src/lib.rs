//! Infrastructure layer for swaytalk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Ollama chat gateway, the Sway IPC client,
//! configuration file loading and the JSONL transcript logger.

pub mod config;
pub mod logging;
pub mod ollama;
pub mod sway;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, ConfigLoader, FileConfig, FileInputConfig, FileIpcConfig, FileLoggingConfig,
    FileModelConfig, FileSessionConfig,
};
pub use logging::JsonlConversationLogger;
pub use ollama::{error::OllamaError, gateway::OllamaGateway, session::OllamaSession};
pub use sway::{
    client::SwayIpcClient, dry_run::DryRunWindowManager, error::SwayIpcError,
};
pub use tools::JsonSchemaToolConverter;

//! Application layer for swaytalk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage},
    progress::{NoSessionProgress, SessionProgressNotifier},
    tool_schema::ToolSchemaPort,
    window_manager::{IpcError, WindowManagerPort},
};
pub use use_cases::dispatch::{DispatchAbort, DispatchGateway, ExecuteError, Executed};
pub use use_cases::run_session::{
    RunSessionError, RunSessionInput, RunSessionOutput, RunSessionUseCase, Termination,
};

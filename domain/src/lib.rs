//! Domain layer for swaytalk
//!
//! This crate contains the rules of the natural-language dispatcher: the
//! command catalog, grammar normalization, the describe/execute protocol and
//! per-session state. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Two-step protocol
//!
//! The model never sends raw commands. It first retrieves a command's grammar
//! with `get_docstring`, then calls `execute_code` with an argument string that
//! is normalized and sent to the window manager exactly once.
//!
//! ## Describe policy
//!
//! - **Enforced** (default): executing an undescribed command is refused
//! - **Advisory**: the model is only instructed to describe first

pub mod catalog;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod prompt;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use catalog::{BUILTIN_COMMANDS, CommandCatalog, CommandSpec, Invocation};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::CatalogError, model::Model, string::preview};
pub use dispatch::{DescribePolicy, DispatchFault, EXECUTE_CODE, GET_DOCSTRING, ToolRoute};
pub use prompt::SessionPromptTemplate;
pub use session::{
    response::{ContentBlock, LlmResponse, StopReason},
    state::{CommandState, SessionState, TranscriptEntry},
};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};

//! Tool schema conversion port.
//!
//! Separates "which tools to offer" (domain) from "how to serialize them for
//! the model API" (infrastructure).

use swaytalk_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to the model API's format.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools (sorted by name).
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}

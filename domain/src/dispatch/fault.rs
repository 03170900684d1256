//! Recoverable per-command faults
//!
//! None of these end a session: each is rendered into the tool result the
//! model reads on its next turn.

use crate::core::error::CatalogError;
use crate::tool::value_objects::ToolError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchFault {
    #[error(transparent)]
    NotFound(#[from] CatalogError),

    #[error(
        "Tool '{name}' has not been described yet. Call get_docstring(tool_name=\"{name}\") first, then retry execute_code."
    )]
    NotDescribedYet { name: String },

    #[error("Error executing {name}: {detail}")]
    ExecutionError { name: String, detail: String },

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArgument { tool: String, reason: String },
}

impl DispatchFault {
    pub fn not_described_yet(name: impl Into<String>) -> Self {
        DispatchFault::NotDescribedYet { name: name.into() }
    }

    pub fn execution(name: impl Into<String>, detail: impl Into<String>) -> Self {
        DispatchFault::ExecutionError {
            name: name.into(),
            detail: detail.into(),
        }
    }

    pub fn invalid_argument(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        DispatchFault::InvalidArgument {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code carried in the tool result.
    pub fn code(&self) -> &'static str {
        match self {
            DispatchFault::NotFound(_) => "NOT_FOUND",
            DispatchFault::NotDescribedYet { .. } => "NOT_DESCRIBED_YET",
            DispatchFault::ExecutionError { .. } => "EXECUTION_FAILED",
            DispatchFault::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }

    pub fn to_tool_error(&self) -> ToolError {
        let message = self.to_string();
        match self {
            DispatchFault::NotFound(_) => ToolError::not_found(message),
            DispatchFault::NotDescribedYet { .. } => ToolError::not_described_yet(message),
            DispatchFault::ExecutionError { .. } => ToolError::execution_failed(message),
            DispatchFault::InvalidArgument { .. } => ToolError::invalid_argument(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_uses_catalog_message() {
        let fault: DispatchFault = CatalogError::NotFound {
            name: "levitate".to_string(),
            available: vec!["focus".to_string(), "move".to_string()],
        }
        .into();

        assert_eq!(fault.code(), "NOT_FOUND");
        assert_eq!(
            fault.to_string(),
            "Tool 'levitate' not found. Available tools: focus, move"
        );
    }

    #[test]
    fn test_not_described_yet_names_the_fix() {
        let fault = DispatchFault::not_described_yet("focus");
        let text = fault.to_string();
        assert!(text.contains("get_docstring(tool_name=\"focus\")"));
        assert!(text.contains("execute_code"));
    }

    #[test]
    fn test_execution_error_embeds_detail() {
        let fault = DispatchFault::execution("focus", "No matching node");
        let err = fault.to_tool_error();
        assert_eq!(err.code, fault.code());
        assert_eq!(err.code, "EXECUTION_FAILED");
        assert_eq!(err.message, "Error executing focus: No matching node");
    }

    #[test]
    fn test_tool_error_code_matches_fault() {
        let faults = [
            DispatchFault::from(CatalogError::EmptyName),
            DispatchFault::not_described_yet("gaps"),
            DispatchFault::execution("gaps", "bad"),
            DispatchFault::invalid_argument("execute_code", "missing tool_name"),
        ];

        for fault in faults {
            let err = fault.to_tool_error();
            assert_eq!(err.code, fault.code());
            assert_eq!(err.message, fault.to_string());
        }
    }
}

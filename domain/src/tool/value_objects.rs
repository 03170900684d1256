//! Tool domain value objects — immutable result and error types
//!
//! Every tool call the model proposes produces exactly one [`ToolResult`].
//! Successful and failed results alike are fed back to the model as text:
//! per-command failures are data the agent reacts to, not faults that end
//! the session.

use serde::{Deserialize, Serialize};

/// Error carried by a failed tool result.
///
/// | Code | Raised when |
/// |------|-------------|
/// | `NOT_FOUND` | Unknown command or tool name |
/// | `NOT_DESCRIBED_YET` | `execute_code` before `get_docstring` (enforced policy) |
/// | `INVALID_ARGUMENT` | Missing or malformed tool arguments |
/// | `EXECUTION_FAILED` | The window manager rejected the command |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn not_described_yet(message: impl Into<String>) -> Self {
        Self::new("NOT_DESCRIBED_YET", message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of handling one tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was called
    pub tool_name: String,
    /// Whether the call succeeded
    pub success: bool,
    /// Output content (for successful calls)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed calls)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the call
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about a tool call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of the IPC exchange in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Catalog command the call resolved to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_name: Option<String>,
    /// Normalized command string sent to the window manager
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipc_command: Option<String>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_command_name(mut self, name: impl Into<String>) -> Self {
        self.metadata.command_name = Some(name.into());
        self
    }

    pub fn with_ipc_command(mut self, command: impl Into<String>) -> Self {
        self.metadata.ipc_command = Some(command.into());
        self
    }

    /// Check if the call was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the output content
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Error code, if the call failed
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }

    /// Whether a command was actually sent to the window manager
    pub fn issued_command(&self) -> Option<&str> {
        self.metadata.ipc_command.as_deref()
    }

    /// The text handed back to the model for this result.
    pub fn to_model_text(&self) -> String {
        match (&self.output, &self.error) {
            (Some(output), _) if self.success => output.clone(),
            (_, Some(error)) => error.message.clone(),
            _ => String::new(),
        }
    }
}

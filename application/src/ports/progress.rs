//! Progress notification port
//!
//! Defines the interface for reporting progress during an agent session.

use crate::use_cases::run_session::RunSessionOutput;
use swaytalk_domain::{ToolCall, ToolResult};

/// Callbacks for progress updates during a session
///
/// Implementations live in the presentation layer. All methods default to
/// no-ops so implementors only override what they display.
pub trait SessionProgressNotifier: Send + Sync {
    /// Called once the user's input has been accepted.
    fn on_session_start(&self, _input: &str) {}

    /// Called before each model request (turn is 1-based).
    fn on_model_request(&self, _turn: usize) {}

    /// Called when the model proposes a tool call.
    fn on_tool_call(&self, _call: &ToolCall) {}

    /// Called with the result of a tool call.
    fn on_tool_result(&self, _call: &ToolCall, _result: &ToolResult) {}

    /// Called after the window manager acknowledged a command.
    fn on_command_applied(&self, _command: &str) {}

    /// Called when the session ends normally.
    fn on_session_end(&self, _output: &RunSessionOutput) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoSessionProgress;

impl SessionProgressNotifier for NoSessionProgress {}

//! Per-invocation session state
//!
//! Tracks, for every command name, where it stands in the describe/execute
//! protocol, and keeps the ordered scratchpad of tool calls and results.
//!
//! ```text
//! Undescribed ──describe──▶ Described ──execute──▶ Executed { count }
//!                                                  └──execute──┘
//! ```

use crate::tool::entities::ToolCall;
use crate::tool::value_objects::ToolResult;
use serde::Serialize;
use std::collections::HashMap;

/// Protocol state of one command within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CommandState {
    Undescribed,
    Described,
    Executed { count: u32 },
}

impl CommandState {
    /// Whether the grammar has been retrieved (now or before executing).
    pub fn is_described(&self) -> bool {
        !matches!(self, CommandState::Undescribed)
    }
}

/// One tool call and the result fed back to the model.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// 1-based model turn that proposed the call
    pub turn: usize,
    pub call: ToolCall,
    pub result: ToolResult,
}

/// State of a single user invocation.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    input: String,
    commands: HashMap<String, CommandState>,
    transcript: Vec<TranscriptEntry>,
    applied: Vec<String>,
}

impl SessionState {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state_of(&self, name: &str) -> CommandState {
        self.commands
            .get(name)
            .copied()
            .unwrap_or(CommandState::Undescribed)
    }

    pub fn is_described(&self, name: &str) -> bool {
        self.state_of(name).is_described()
    }

    /// Mark `name` as described. Describing an executed command keeps its count.
    pub fn mark_described(&mut self, name: &str) {
        if !self.is_described(name) {
            self.commands
                .insert(name.to_string(), CommandState::Described);
        }
    }

    /// Record that `command` was sent for the catalog entry `name`.
    ///
    /// Entering `Executed` from `Undescribed` only happens under the advisory
    /// policy.
    pub fn record_execution(&mut self, name: &str, command: impl Into<String>) {
        let next = match self.state_of(name) {
            CommandState::Executed { count } => CommandState::Executed { count: count + 1 },
            _ => CommandState::Executed { count: 1 },
        };
        self.commands.insert(name.to_string(), next);
        self.applied.push(command.into());
    }

    /// Names whose documentation has been retrieved, sorted.
    pub fn described_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .commands
            .iter()
            .filter(|(_, state)| state.is_described())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn push(&mut self, turn: usize, call: ToolCall, result: ToolResult) {
        self.transcript.push(TranscriptEntry { turn, call, result });
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Commands acknowledged by the window manager, in order.
    pub fn commands_applied(&self) -> &[String] {
        &self.applied
    }

    /// Consume the state, returning the transcript and applied commands.
    pub fn into_parts(self) -> (Vec<TranscriptEntry>, Vec<String>) {
        (self.transcript, self.applied)
    }
}

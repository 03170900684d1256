//! Run session use case — the bounded agent loop
//!
//! One user input drives one sequential conversation with the model:
//!
//! ```text
//! input ─▶ send_with_tools ─▶ response ─┬─ no tool calls ─▶ done (ModelFinished)
//!                                        └─ tool calls ─▶ DispatchGateway::handle (in order)
//!                                                        ─▶ send_tool_results ─▶ response …
//! ```
//!
//! The loop makes at most `max_turns` result round-trips after the initial
//! request. Hitting the limit ends the session normally with
//! [`Termination::TurnLimit`]; only timeouts and malformed proposals are
//! errors.

use crate::config::SessionConfig;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage};
use crate::ports::progress::{NoSessionProgress, SessionProgressNotifier};
use crate::ports::tool_schema::ToolSchemaPort;
use crate::use_cases::dispatch::{DispatchAbort, DispatchGateway};
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use swaytalk_domain::{
    LlmResponse, SessionPromptTemplate, SessionState, ToolCall, TranscriptEntry, preview,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Identical consecutive proposals tolerated before the model is considered stuck.
const REPEAT_LIMIT: usize = 3;

/// Session-fatal errors
#[derive(Error, Debug)]
pub enum RunSessionError {
    /// The model produced an unparsable or looping proposal.
    #[error("Agent protocol error: {0}")]
    AgentProtocol(String),

    #[error("Timed out waiting for {target} after {after:?}")]
    Timeout { target: &'static str, after: Duration },

    #[error("Gateway error: {0}")]
    Gateway(GatewayError),
}

impl From<GatewayError> for RunSessionError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidResponse(detail) => RunSessionError::AgentProtocol(detail),
            other => RunSessionError::Gateway(other),
        }
    }
}

impl From<DispatchAbort> for RunSessionError {
    fn from(abort: DispatchAbort) -> Self {
        match abort {
            DispatchAbort::Timeout { after, .. } => RunSessionError::Timeout {
                target: "the window manager",
                after,
            },
        }
    }
}

/// Input for one session
#[derive(Debug, Clone)]
pub struct RunSessionInput {
    /// Free text to interpret
    pub input: String,
}

impl RunSessionInput {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The model answered without tool calls.
    ModelFinished,
    /// `max_turns` round-trips were used up.
    TurnLimit,
}

/// Result of a completed session
#[derive(Debug, Clone, Serialize)]
pub struct RunSessionOutput {
    /// Text of the model's last response (may be empty)
    pub final_message: String,
    /// Every tool call with its result, in order
    pub transcript: Vec<TranscriptEntry>,
    /// Commands the window manager acknowledged, in order
    pub commands_applied: Vec<String>,
    /// Model responses received
    pub turns: usize,
    pub terminated_by: Termination,
}

/// Use case driving one user input through the agent loop
pub struct RunSessionUseCase {
    gateway: Arc<dyn LlmGateway>,
    dispatch: DispatchGateway,
    tool_schema: Arc<dyn ToolSchemaPort>,
    config: SessionConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RunSessionUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        dispatch: DispatchGateway,
        tool_schema: Arc<dyn ToolSchemaPort>,
        config: SessionConfig,
    ) -> Self {
        Self {
            gateway,
            dispatch,
            tool_schema,
            config,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set a conversation logger for structured transcript logging.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub async fn execute(&self, input: RunSessionInput) -> Result<RunSessionOutput, RunSessionError> {
        self.execute_with_progress(input, &NoSessionProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: RunSessionInput,
        progress: &dyn SessionProgressNotifier,
    ) -> Result<RunSessionOutput, RunSessionError> {
        let user_message = SessionPromptTemplate::user_input(&input.input);
        let mut state = SessionState::new(user_message.clone());

        info!(model = %self.config.model, input = %preview(&user_message, 80), "Session started");
        progress.on_session_start(&user_message);
        self.log_event(
            "session_start",
            serde_json::json!({
                "input": user_message,
                "model": self.config.model.as_str(),
                "describe_policy": self.config.describe_policy.as_str(),
                "max_turns": self.config.max_turns,
            }),
        );

        let system_prompt = SessionPromptTemplate::system(
            self.dispatch.catalog(),
            self.config.expose_command_stubs,
            self.config.describe_policy,
        );
        let session = self
            .bounded(
                self.gateway
                    .create_session_with_system_prompt(&self.config.model, &system_prompt),
            )
            .await?;
        let tools = self.tool_schema.all_tools_schema(self.dispatch.tool_spec());

        progress.on_model_request(1);
        self.log_event(
            "llm_request",
            serde_json::json!({ "turn": 1, "content": user_message, "tools": tools.len() }),
        );
        let mut response = self
            .bounded(session.send_with_tools(&user_message, &tools))
            .await?;
        let mut turns = 1;
        self.log_response(turns, &response);

        let mut round_trips = 0;
        let mut last_signature: Option<Vec<CallSignature>> = None;
        let mut repeats = 0;

        let terminated_by = loop {
            if !response.has_tool_calls() {
                break Termination::ModelFinished;
            }
            let calls = response.tool_calls();

            if round_trips >= self.config.max_turns {
                warn!(max_turns = self.config.max_turns, "Session reached its turn limit");
                break Termination::TurnLimit;
            }

            let signature = check_proposal(&calls)?;
            if last_signature.as_ref() == Some(&signature) {
                repeats += 1;
                if repeats + 1 >= REPEAT_LIMIT {
                    return Err(RunSessionError::AgentProtocol(format!(
                        "model repeated the same tool calls {} times",
                        REPEAT_LIMIT
                    )));
                }
            } else {
                repeats = 0;
            }
            last_signature = Some(signature);

            let results = self
                .dispatch_calls(session.as_ref(), &mut state, turns, calls, progress)
                .await?;

            round_trips += 1;
            turns += 1;
            debug!(
                turn = turns,
                max_turns = self.config.max_turns,
                results = results.len(),
                "Sending tool results"
            );
            progress.on_model_request(turns);
            self.log_event(
                "llm_request",
                serde_json::json!({ "turn": turns, "tool_results": results.len() }),
            );
            response = self.bounded(session.send_tool_results(&results)).await?;
            self.log_response(turns, &response);
        };

        let final_message = response.text_content().trim().to_string();
        let (transcript, commands_applied) = state.into_parts();
        let output = RunSessionOutput {
            final_message,
            transcript,
            commands_applied,
            turns,
            terminated_by,
        };

        info!(
            turns,
            applied = output.commands_applied.len(),
            terminated_by = ?terminated_by,
            "Session finished"
        );
        self.log_event(
            "session_end",
            serde_json::json!({
                "turns": turns,
                "terminated_by": terminated_by,
                "commands_applied": output.commands_applied,
                "final_message": output.final_message,
            }),
        );
        progress.on_session_end(&output);

        Ok(output)
    }

    /// Dispatch one response's calls in order and collect their results.
    async fn dispatch_calls(
        &self,
        session: &dyn LlmSession,
        state: &mut SessionState,
        turn: usize,
        calls: Vec<ToolCall>,
        progress: &dyn SessionProgressNotifier,
    ) -> Result<Vec<ToolResultMessage>, RunSessionError> {
        let mut messages = Vec::with_capacity(calls.len());

        for (index, call) in calls.into_iter().enumerate() {
            debug!(model = %session.model(), tool = %call.tool_name, "Tool call proposed");
            progress.on_tool_call(&call);
            self.log_event(
                "tool_call",
                serde_json::json!({
                    "turn": turn,
                    "tool": call.tool_name,
                    "arguments": call.arguments,
                }),
            );

            let result = self.dispatch.handle(state, &call).await?;

            progress.on_tool_result(&call, &result);
            self.log_event(
                "tool_result",
                serde_json::json!({
                    "turn": turn,
                    "tool": call.tool_name,
                    "success": result.is_success(),
                    "code": result.error_code(),
                    "output": preview(&result.to_model_text(), 200),
                }),
            );
            if let Some(command) = result.issued_command().filter(|_| result.is_success()) {
                progress.on_command_applied(command);
                self.log_event(
                    "command_applied",
                    serde_json::json!({
                        "command": command,
                        "duration_ms": result.metadata.duration_ms,
                    }),
                );
            }

            messages.push(ToolResultMessage {
                tool_use_id: call
                    .native_id
                    .clone()
                    .unwrap_or_else(|| format!("call_{}_{}", turn, index)),
                tool_name: call.tool_name.clone(),
                output: result.to_model_text(),
                is_error: !result.is_success(),
            });
            state.push(turn, call, result);
        }

        Ok(messages)
    }

    /// Bound a model call by the configured timeout.
    async fn bounded<T>(
        &self,
        future: impl Future<Output = Result<T, GatewayError>>,
    ) -> Result<T, RunSessionError> {
        let after = self.config.model_timeout;
        match tokio::time::timeout(after, future).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(GatewayError::Timeout)) | Err(_) => Err(RunSessionError::Timeout {
                target: "the model",
                after,
            }),
            Ok(Err(e)) => Err(e.into()),
        }
    }

    fn log_response(&self, turn: usize, response: &LlmResponse) {
        let calls: Vec<&str> = response
            .content
            .iter()
            .filter_map(|block| block.as_tool_use().map(|(_, name, _)| name))
            .collect();
        self.log_event(
            "llm_response",
            serde_json::json!({
                "turn": turn,
                "text": response.text_content(),
                "tool_calls": calls,
            }),
        );
    }

    fn log_event(&self, event_type: &'static str, payload: serde_json::Value) {
        self.conversation_logger
            .log(ConversationEvent::new(event_type, payload));
    }
}

type CallSignature = (String, HashMap<String, serde_json::Value>);

/// Reject proposals that cannot be dispatched unambiguously.
fn check_proposal(calls: &[ToolCall]) -> Result<Vec<CallSignature>, RunSessionError> {
    calls
        .iter()
        .map(|call| {
            if call.tool_name.trim().is_empty() {
                Err(RunSessionError::AgentProtocol(
                    "model proposed a tool call without a name".to_string(),
                ))
            } else {
                Ok((call.tool_name.trim().to_string(), call.arguments.clone()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::window_manager::{IpcError, WindowManagerPort};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use swaytalk_domain::{CommandCatalog, ContentBlock, DescribePolicy, Model, StopReason, ToolDefinition, ToolSpec};

    // ==================== Test Infrastructure ====================

    /// A scripted response for the mock session
    #[derive(Debug, Clone)]
    enum ScriptedResponse {
        Response(LlmResponse),
        Error(String),
        Invalid(String),
        Hang,
    }

    fn text(s: &str) -> ScriptedResponse {
        ScriptedResponse::Response(LlmResponse::from_text(s))
    }

    fn calls(calls: &[(&str, &[(&str, &str)])]) -> ScriptedResponse {
        let content = calls
            .iter()
            .enumerate()
            .map(|(i, (name, args))| ContentBlock::ToolUse {
                id: format!("call_{}", i),
                name: name.to_string(),
                input: args
                    .iter()
                    .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
                    .collect(),
            })
            .collect();
        ScriptedResponse::Response(LlmResponse {
            content,
            stop_reason: Some(StopReason::ToolUse),
            model: None,
        })
    }

    fn describe(name: &str) -> ScriptedResponse {
        calls(&[("get_docstring", &[("tool_name", name)])])
    }

    fn execute(name: &str, args: &str) -> ScriptedResponse {
        calls(&[("execute_code", &[("tool_name", name), ("arguments", args)])])
    }

    /// Mock session that returns scripted responses in order
    struct ScriptedSession {
        model: Model,
        responses: Mutex<VecDeque<ScriptedResponse>>,
        sent_results: Arc<Mutex<Vec<Vec<ToolResultMessage>>>>,
    }

    impl ScriptedSession {
        fn next_response(&self) -> ScriptedResponse {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| text("(no more responses)"))
        }

        async fn respond(&self) -> Result<LlmResponse, GatewayError> {
            match self.next_response() {
                ScriptedResponse::Response(r) => Ok(r),
                ScriptedResponse::Error(e) => Err(GatewayError::RequestFailed(e)),
                ScriptedResponse::Invalid(e) => Err(GatewayError::InvalidResponse(e)),
                ScriptedResponse::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Ok(LlmResponse::from_text("too late"))
                }
            }
        }
    }

    #[async_trait]
    impl LlmSession for ScriptedSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send_with_tools(
            &self,
            _content: &str,
            _tools: &[serde_json::Value],
        ) -> Result<LlmResponse, GatewayError> {
            self.respond().await
        }

        async fn send_tool_results(
            &self,
            results: &[ToolResultMessage],
        ) -> Result<LlmResponse, GatewayError> {
            self.sent_results.lock().unwrap().push(results.to_vec());
            self.respond().await
        }
    }

    /// Mock gateway handing out one scripted session
    struct ScriptedGateway {
        responses: Mutex<Option<Vec<ScriptedResponse>>>,
        system_prompts: Mutex<Vec<String>>,
        sent_results: Arc<Mutex<Vec<Vec<ToolResultMessage>>>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<ScriptedResponse>) -> Self {
            Self {
                responses: Mutex::new(Some(responses)),
                system_prompts: Mutex::new(Vec::new()),
                sent_results: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn create_session_with_system_prompt(
            &self,
            model: &Model,
            system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.system_prompts
                .lock()
                .unwrap()
                .push(system_prompt.to_string());
            let responses = self.responses.lock().unwrap().take().unwrap_or_default();
            Ok(Box::new(ScriptedSession {
                model: model.clone(),
                responses: Mutex::new(responses.into()),
                sent_results: self.sent_results.clone(),
            }))
        }
    }

    /// Window manager double that records commands and replays scripted replies
    struct RecordingWindowManager {
        commands: Mutex<Vec<String>>,
        replies: Mutex<VecDeque<Result<(), IpcError>>>,
    }

    impl RecordingWindowManager {
        fn new() -> Self {
            Self::with_replies(Vec::new())
        }

        fn with_replies(replies: Vec<Result<(), IpcError>>) -> Self {
            Self {
                commands: Mutex::new(Vec::new()),
                replies: Mutex::new(replies.into()),
            }
        }

        fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WindowManagerPort for RecordingWindowManager {
        async fn run_command(&self, command: &str) -> Result<(), IpcError> {
            self.commands.lock().unwrap().push(command.to_string());
            self.replies.lock().unwrap().pop_front().unwrap_or(Ok(()))
        }
    }

    /// Schema converter that only keeps tool names
    struct NameOnlySchema;

    impl ToolSchemaPort for NameOnlySchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
            serde_json::json!({ "name": tool.name })
        }

        fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
            spec.names()
                .into_iter()
                .filter_map(|name| spec.get(name))
                .map(|tool| self.tool_to_schema(tool))
                .collect()
        }
    }

    /// Logger that keeps event types
    #[derive(Default)]
    struct CollectingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for CollectingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn use_case(
        gateway: Arc<ScriptedGateway>,
        wm: Arc<RecordingWindowManager>,
        config: SessionConfig,
    ) -> RunSessionUseCase {
        let dispatch = DispatchGateway::new(
            CommandCatalog::builtin(),
            wm,
            config.describe_policy,
            config.expose_command_stubs,
        );
        RunSessionUseCase::new(gateway, dispatch, Arc::new(NameOnlySchema), config)
    }

    // ==================== End-to-end scenarios ====================

    #[tokio::test]
    async fn test_focus_next() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("focus"),
            execute("focus", "next"),
            text("Focused the next window."),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let logger = Arc::new(CollectingLogger::default());
        let use_case = use_case(gateway.clone(), wm.clone(), SessionConfig::default())
            .with_conversation_logger(logger.clone());

        let output = use_case.execute(RunSessionInput::new("focus next")).await.unwrap();

        assert_eq!(wm.commands(), vec!["focus next"]);
        assert_eq!(output.commands_applied, vec!["focus next"]);
        assert_eq!(output.terminated_by, Termination::ModelFinished);
        assert_eq!(output.turns, 3);
        assert_eq!(output.final_message, "Focused the next window.");
        assert_eq!(output.transcript.len(), 2);
        assert!(output.transcript[0].result.output().unwrap().contains("Documentation for focus"));

        let sent = gateway.sent_results.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0][0].tool_use_id, "call_0");
        assert!(!sent[1][0].is_error);

        let events = logger.events.lock().unwrap();
        assert_eq!(events.first(), Some(&"session_start"));
        assert_eq!(events.last(), Some(&"session_end"));
        assert_eq!(events.iter().filter(|e| **e == "command_applied").count(), 1);
    }

    #[tokio::test]
    async fn test_make_it_fullscreen() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("fullscreen"),
            execute("fullscreen", "toggle"),
            text(""),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway, wm.clone(), SessionConfig::default());

        let output = use_case
            .execute(RunSessionInput::new("make it fullscreen"))
            .await
            .unwrap();

        assert_eq!(wm.commands(), vec!["fullscreen toggle"]);
        assert_eq!(output.final_message, "");
    }

    #[tokio::test]
    async fn test_tool_calls_run_even_when_model_reports_end_turn() {
        let end_turn = |scripted: ScriptedResponse| match scripted {
            ScriptedResponse::Response(response) => ScriptedResponse::Response(LlmResponse {
                stop_reason: Some(StopReason::EndTurn),
                ..response
            }),
            other => other,
        };
        let gateway = Arc::new(ScriptedGateway::new(vec![
            end_turn(describe("focus")),
            end_turn(execute("focus", "left")),
            text("Done."),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway, wm.clone(), SessionConfig::default());

        let output = use_case.execute(RunSessionInput::new("focus left")).await.unwrap();

        assert_eq!(wm.commands(), vec!["focus left"]);
        assert_eq!(output.terminated_by, Termination::ModelFinished);
    }

    #[tokio::test]
    async fn test_quit_sends_bare_exit() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("exit"),
            execute("exit", ""),
            text("Bye."),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway, wm.clone(), SessionConfig::default());

        use_case.execute(RunSessionInput::new("quit")).await.unwrap();

        assert_eq!(wm.commands(), vec!["exit"]);
    }

    #[tokio::test]
    async fn test_unknown_command_never_reaches_ipc() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("levitate"),
            text("I can't levitate windows."),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway.clone(), wm.clone(), SessionConfig::default());

        let output = use_case
            .execute(RunSessionInput::new("levitate window"))
            .await
            .unwrap();

        assert!(wm.commands().is_empty());
        assert!(output.commands_applied.is_empty());
        assert_eq!(output.final_message, "I can't levitate windows.");
        assert_eq!(output.transcript[0].result.error_code(), Some("NOT_FOUND"));

        let sent = gateway.sent_results.lock().unwrap();
        assert!(sent[0][0].is_error);
        assert!(sent[0][0].output.contains("Available tools: focus, move"));
    }

    // ==================== Protocol properties ====================

    #[tokio::test]
    async fn test_enforced_policy_rejects_execute_before_describe() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            execute("focus", "next"),
            describe("focus"),
            execute("focus", "next"),
            text("Done."),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway, wm.clone(), SessionConfig::default());

        let output = use_case.execute(RunSessionInput::new("focus next")).await.unwrap();

        assert_eq!(
            output.transcript[0].result.error_code(),
            Some("NOT_DESCRIBED_YET")
        );
        assert_eq!(wm.commands(), vec!["focus next"]);
    }

    #[tokio::test]
    async fn test_advisory_policy_allows_direct_execute() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            execute("focus", "next"),
            text("Done."),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let config = SessionConfig::default().with_describe_policy(DescribePolicy::Advisory);
        let use_case = use_case(gateway, wm.clone(), config);

        use_case.execute(RunSessionInput::new("focus next")).await.unwrap();

        assert_eq!(wm.commands(), vec!["focus next"]);
    }

    #[tokio::test]
    async fn test_multiple_calls_in_one_response_run_in_order() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            calls(&[
                ("get_docstring", &[("tool_name", "border")]),
                ("execute_code", &[("tool_name", "border"), ("arguments", "pixel 2")]),
            ]),
            text("Done."),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway.clone(), wm.clone(), SessionConfig::default());

        let output = use_case.execute(RunSessionInput::new("thin borders")).await.unwrap();

        assert_eq!(wm.commands(), vec!["border pixel 2"]);
        assert_eq!(output.turns, 2);
        assert_eq!(gateway.sent_results.lock().unwrap()[0].len(), 2);
    }

    #[tokio::test]
    async fn test_remote_error_is_fed_back() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("focus"),
            execute("focus", "sideways"),
            execute("focus", "left"),
            text("Done."),
        ]));
        let wm = Arc::new(RecordingWindowManager::with_replies(vec![
            Err(IpcError::Remote("Expected direction".to_string())),
            Ok(()),
        ]));
        let use_case = use_case(gateway.clone(), wm.clone(), SessionConfig::default());

        let output = use_case.execute(RunSessionInput::new("focus")).await.unwrap();

        assert_eq!(wm.commands(), vec!["focus sideways", "focus left"]);
        assert_eq!(output.commands_applied, vec!["focus left"]);
        let sent = gateway.sent_results.lock().unwrap();
        assert_eq!(sent[1][0].output, "Error executing focus: Expected direction");
    }

    #[tokio::test]
    async fn test_turn_limit_ends_session() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("focus"),
            describe("move"),
            describe("gaps"),
            describe("swap"),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let config = SessionConfig::default().with_max_turns(2);
        let use_case = use_case(gateway.clone(), wm, config);

        let output = use_case.execute(RunSessionInput::new("do things")).await.unwrap();

        assert_eq!(output.terminated_by, Termination::TurnLimit);
        assert_eq!(output.turns, 3);
        assert_eq!(gateway.sent_results.lock().unwrap().len(), 2);
        assert_eq!(output.transcript.len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_proposal_is_protocol_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("focus"),
            describe("focus"),
            describe("focus"),
            text("unreachable"),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway, wm, SessionConfig::default());

        let err = use_case.execute(RunSessionInput::new("focus")).await.unwrap_err();
        assert!(matches!(err, RunSessionError::AgentProtocol(_)));
    }

    #[tokio::test]
    async fn test_unparsable_proposal_aborts_without_ipc() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("focus"),
            ScriptedResponse::Invalid("arguments are not a JSON object".to_string()),
        ]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway, wm.clone(), SessionConfig::default());

        let err = use_case.execute(RunSessionInput::new("focus")).await.unwrap_err();

        assert!(matches!(err, RunSessionError::AgentProtocol(ref m) if m.contains("JSON object")));
        assert!(wm.commands().is_empty());
    }

    #[tokio::test]
    async fn test_nameless_tool_call_is_protocol_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![calls(&[(" ", &[])])]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway, wm, SessionConfig::default());

        let err = use_case.execute(RunSessionInput::new("x")).await.unwrap_err();
        assert!(matches!(err, RunSessionError::AgentProtocol(_)));
    }

    #[tokio::test]
    async fn test_model_timeout() {
        let gateway = Arc::new(ScriptedGateway::new(vec![ScriptedResponse::Hang]));
        let wm = Arc::new(RecordingWindowManager::new());
        let config = SessionConfig::default().with_model_timeout(Duration::from_millis(20));
        let use_case = use_case(gateway, wm, config);

        let err = use_case.execute(RunSessionInput::new("focus")).await.unwrap_err();
        assert!(matches!(
            err,
            RunSessionError::Timeout { target: "the model", .. }
        ));
    }

    #[tokio::test]
    async fn test_ipc_timeout_aborts_session() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            describe("reload"),
            execute("reload", ""),
            text("Done."),
        ]));
        let wm = Arc::new(RecordingWindowManager::with_replies(vec![Err(
            IpcError::Timeout(Duration::from_secs(5)),
        )]));
        let use_case = use_case(gateway, wm, SessionConfig::default());

        let err = use_case.execute(RunSessionInput::new("reload")).await.unwrap_err();
        assert!(matches!(
            err,
            RunSessionError::Timeout { target: "the window manager", .. }
        ));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let gateway = Arc::new(ScriptedGateway::new(vec![ScriptedResponse::Error(
            "connection refused".to_string(),
        )]));
        let wm = Arc::new(RecordingWindowManager::new());
        let use_case = use_case(gateway, wm, SessionConfig::default());

        let err = use_case.execute(RunSessionInput::new("focus")).await.unwrap_err();
        assert!(matches!(err, RunSessionError::Gateway(GatewayError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_system_prompt_lists_commands_without_stubs() {
        let gateway = Arc::new(ScriptedGateway::new(vec![text("ok")]));
        let wm = Arc::new(RecordingWindowManager::new());
        let config = SessionConfig::default().with_command_stubs(false);
        let use_case = use_case(gateway.clone(), wm, config);

        use_case.execute(RunSessionInput::new("hello")).await.unwrap();

        let prompts = gateway.system_prompts.lock().unwrap();
        assert!(prompts[0].contains("- title_format: Set format for window titles"));
    }
}

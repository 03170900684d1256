//! Dispatch gateway — the describe/execute protocol bound to the window manager
//!
//! Every tool call the model proposes is answered with exactly one
//! [`ToolResult`]. Per-command faults (unknown names, skipped describe,
//! rejected commands) become failed results the model reads on its next turn;
//! only an IPC timeout escapes as a [`DispatchAbort`].

use crate::ports::window_manager::{IpcError, WindowManagerPort};
use std::sync::Arc;
use std::time::{Duration, Instant};
use swaytalk_domain::catalog::normalize::chains_commands;
use swaytalk_domain::dispatch::protocol::{self, PARAM_ARGUMENTS, PARAM_TOOL_NAME};
use swaytalk_domain::{
    CommandCatalog, DefaultToolValidator, DescribePolicy, DispatchFault, EXECUTE_CODE,
    GET_DOCSTRING, SessionState, ToolCall, ToolResult, ToolRoute, ToolSpec, ToolValidator,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Session-fatal outcome of a dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchAbort {
    #[error("window manager did not answer '{command}' within {after:?}")]
    Timeout { command: String, after: Duration },
}

/// Error from [`DispatchGateway::execute`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecuteError {
    #[error(transparent)]
    Fault(#[from] DispatchFault),

    #[error(transparent)]
    Abort(#[from] DispatchAbort),
}

/// Outcome of an accepted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    /// Catalog entry name
    pub name: String,
    /// Normalized command sent to the window manager
    pub command: String,
    pub duration: Duration,
}

/// Resolves tool calls against the catalog and issues commands.
///
/// The window manager handle is injected and shared; this is the only
/// component that sends commands over it.
pub struct DispatchGateway {
    catalog: CommandCatalog,
    tool_spec: ToolSpec,
    policy: DescribePolicy,
    window_manager: Arc<dyn WindowManagerPort>,
}

impl DispatchGateway {
    pub fn new(
        catalog: CommandCatalog,
        window_manager: Arc<dyn WindowManagerPort>,
        policy: DescribePolicy,
        expose_stubs: bool,
    ) -> Self {
        Self {
            tool_spec: protocol::tool_spec(&catalog, expose_stubs),
            catalog,
            policy,
            window_manager,
        }
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// Tools offered to the model.
    pub fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    pub fn policy(&self) -> DescribePolicy {
        self.policy
    }

    /// Return the grammar document for `tool_name` and mark it described.
    pub fn describe(&self, state: &mut SessionState, tool_name: &str) -> Result<String, DispatchFault> {
        let name = tool_name.trim();
        let command = self.catalog.lookup(name)?;
        state.mark_described(command.name);
        debug!(command = command.name, "Described command");
        Ok(protocol::describe_text(command))
    }

    /// Normalize `argument` for `tool_name` and send it to the window manager.
    ///
    /// Nothing is sent when the name is unknown or, under the enforced
    /// policy, when the command has not been described in this session or
    /// chains further commands with `;` or `,`.
    pub async fn execute(
        &self,
        state: &mut SessionState,
        tool_name: &str,
        argument: &str,
    ) -> Result<Executed, ExecuteError> {
        let name = tool_name.trim();
        let spec = self.catalog.lookup(name).map_err(DispatchFault::from)?;

        if self.policy.is_enforced() && !state.is_described(spec.name) {
            warn!(command = spec.name, "Execute attempted before describe");
            return Err(DispatchFault::not_described_yet(spec.name).into());
        }

        let command = spec.command_for(argument);
        if self.policy.is_enforced() && chains_commands(&command) {
            warn!(command = %command, "Chained command rejected");
            return Err(DispatchFault::invalid_argument(
                EXECUTE_CODE,
                format!(
                    "'{}' must hold a single {} command; execute each command separately",
                    PARAM_ARGUMENTS, spec.name
                ),
            )
            .into());
        }

        let started = Instant::now();
        match self.window_manager.run_command(&command).await {
            Ok(()) => {
                info!(command = %command, "Command applied");
                state.record_execution(spec.name, command.clone());
                Ok(Executed {
                    name: spec.name.to_string(),
                    command,
                    duration: started.elapsed(),
                })
            }
            Err(IpcError::Timeout(after)) => {
                warn!(command = %command, ?after, "Command timed out");
                Err(DispatchAbort::Timeout { command, after }.into())
            }
            Err(IpcError::Remote(detail)) => {
                info!(command = %command, error = %detail, "Command rejected");
                Err(DispatchFault::execution(spec.name, detail).into())
            }
            Err(e) => {
                warn!(command = %command, error = %e, "Command not delivered");
                Err(DispatchFault::execution(spec.name, e.to_string()).into())
            }
        }
    }

    /// Route one proposed tool call and produce the result for the model.
    pub async fn handle(
        &self,
        state: &mut SessionState,
        call: &ToolCall,
    ) -> Result<ToolResult, DispatchAbort> {
        let tool = call.tool_name.as_str();

        match protocol::route(&self.tool_spec, &self.catalog, tool) {
            ToolRoute::Describe => {
                let name = match self.command_name(call, GET_DOCSTRING) {
                    Ok(name) => name,
                    Err(fault) => return Ok(failure(tool, &fault)),
                };
                Ok(match self.describe(state, &name) {
                    Ok(text) => ToolResult::success(tool, text).with_command_name(name.trim()),
                    Err(fault) => failure(tool, &fault),
                })
            }
            ToolRoute::Execute => {
                let name = match self.command_name(call, EXECUTE_CODE) {
                    Ok(name) => name,
                    Err(fault) => return Ok(failure(tool, &fault)),
                };
                let argument = call.get_text(PARAM_ARGUMENTS).unwrap_or_default();

                match self.execute(state, &name, &argument).await {
                    Ok(executed) => Ok(ToolResult::success(
                        tool,
                        protocol::execute_ack(&executed.command),
                    )
                    .with_command_name(executed.name)
                    .with_ipc_command(executed.command)
                    .with_duration(executed.duration.as_millis() as u64)),
                    Err(ExecuteError::Fault(fault)) => Ok(failure(tool, &fault)),
                    Err(ExecuteError::Abort(abort)) => Err(abort),
                }
            }
            ToolRoute::Stub(command) => {
                debug!(command = command.name, "Stub tool called directly");
                Ok(ToolResult::success(tool, protocol::stub_hint(command.name))
                    .with_command_name(command.name))
            }
            ToolRoute::Unknown => {
                let fault: DispatchFault =
                    protocol::unknown_tool(&self.tool_spec, &self.catalog, tool).into();
                Ok(failure(tool, &fault))
            }
        }
    }

    /// Validate the call against its protocol tool and extract `tool_name`.
    fn command_name(&self, call: &ToolCall, canonical: &str) -> Result<String, DispatchFault> {
        if let Some(definition) = self.tool_spec.get(canonical) {
            DefaultToolValidator
                .validate(call, definition)
                .map_err(|reason| DispatchFault::invalid_argument(canonical, reason))?;
        }

        match call.get_string(PARAM_TOOL_NAME) {
            Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
            _ => Err(DispatchFault::invalid_argument(
                canonical,
                format!("'{}' must be a string naming a command", PARAM_TOOL_NAME),
            )),
        }
    }
}

fn failure(tool: &str, fault: &DispatchFault) -> ToolResult {
    ToolResult::failure(tool, fault.to_tool_error())
}

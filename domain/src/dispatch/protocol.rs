//! The two-step describe/execute tool protocol
//!
//! The model sees two protocol tools, [`GET_DOCSTRING`] and [`EXECUTE_CODE`],
//! plus (optionally) one argument-less stub per catalog entry carrying only its
//! one-line summary. Stubs keep the listing short; the full grammar is fetched
//! on demand through `get_docstring`.

use crate::catalog::{CommandCatalog, CommandSpec};
use crate::core::error::CatalogError;
use crate::tool::entities::{ToolDefinition, ToolParameter, ToolSpec};

/// Tool that returns a command's grammar document.
pub const GET_DOCSTRING: &str = "get_docstring";
/// Tool that normalizes and sends a command.
pub const EXECUTE_CODE: &str = "execute_code";

/// Parameter naming the catalog command.
pub const PARAM_TOOL_NAME: &str = "tool_name";
/// Parameter carrying the argument string.
pub const PARAM_ARGUMENTS: &str = "arguments";

/// Names models commonly use for the describe step.
pub const DESCRIBE_ALIASES: &[&str] = &["describe", "get_docs", "docs"];
/// Names models commonly use for the execute step.
pub const EXECUTE_ALIASES: &[&str] = &["execute", "run", "run_command"];

/// Build the tool listing offered to the model.
pub fn tool_spec(catalog: &CommandCatalog, expose_stubs: bool) -> ToolSpec {
    let mut spec = ToolSpec::new()
        .register(
            ToolDefinition::new(GET_DOCSTRING, "Get the full documentation for a specific tool")
                .with_parameter(ToolParameter::new(
                    PARAM_TOOL_NAME,
                    "The name of the tool to get documentation for",
                    true,
                )),
        )
        .register(
            ToolDefinition::new(
                EXECUTE_CODE,
                "Execute a tool after reviewing its documentation",
            )
            .with_parameter(ToolParameter::new(
                PARAM_TOOL_NAME,
                "The name of the tool to execute",
                true,
            ))
            .with_parameter(ToolParameter::new(
                PARAM_ARGUMENTS,
                "The arguments to pass to the tool",
                false,
            )),
        )
        .register_aliases(DESCRIBE_ALIASES.iter().map(|alias| (*alias, GET_DOCSTRING)))
        .register_aliases(EXECUTE_ALIASES.iter().map(|alias| (*alias, EXECUTE_CODE)));

    if expose_stubs {
        for command in catalog.iter() {
            spec = spec.register(ToolDefinition::new(command.name, command.summary));
        }
    }

    spec
}

/// Where a proposed tool name is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolRoute {
    Describe,
    Execute,
    /// A command name used directly as a tool
    Stub(&'static CommandSpec),
    Unknown,
}

/// Resolve a proposed tool name against the listing and the catalog.
///
/// Command names route to [`ToolRoute::Stub`] even when stubs are not
/// listed, so a model that guesses a command name still gets the redirect.
pub fn route(spec: &ToolSpec, catalog: &CommandCatalog, tool_name: &str) -> ToolRoute {
    let name = tool_name.trim();
    match spec.resolve(name) {
        Some(GET_DOCSTRING) => ToolRoute::Describe,
        Some(EXECUTE_CODE) => ToolRoute::Execute,
        _ => match catalog.get(name) {
            Some(command) => ToolRoute::Stub(command),
            None => ToolRoute::Unknown,
        },
    }
}

/// `NotFound` for a tool name that is neither a protocol tool nor a command.
pub fn unknown_tool(spec: &ToolSpec, catalog: &CommandCatalog, tool_name: &str) -> CatalogError {
    let mut available: Vec<String> = spec
        .names()
        .into_iter()
        .filter(|name| *name == GET_DOCSTRING || *name == EXECUTE_CODE)
        .map(str::to_string)
        .collect();
    available.extend(catalog.names().map(str::to_string));

    CatalogError::NotFound {
        name: tool_name.trim().to_string(),
        available,
    }
}

/// Grammar document plus the shape of the follow-up call.
pub fn describe_text(command: &CommandSpec) -> String {
    let follow_up = if command.requires_argument() {
        format!(
            "{}({}=\"{}\", {}=\"your_args\")",
            EXECUTE_CODE, PARAM_TOOL_NAME, command.name, PARAM_ARGUMENTS
        )
    } else {
        format!("{}({}=\"{}\")", EXECUTE_CODE, PARAM_TOOL_NAME, command.name)
    };

    format!(
        "Documentation for {}:\n{}\n\nNow you can execute this tool with: {}",
        command.name, command.grammar, follow_up
    )
}

/// Redirect returned when a stub is called directly.
pub fn stub_hint(name: &str) -> String {
    format!(
        "Please use {GET_DOCSTRING}({PARAM_TOOL_NAME}=\"{name}\") first to see documentation, then call {EXECUTE_CODE}({PARAM_TOOL_NAME}=\"{name}\", {PARAM_ARGUMENTS}=\"your_args\")"
    )
}

/// Acknowledgement for a command the window manager accepted.
pub fn execute_ack(command: &str) -> String {
    format!("Executed '{}' successfully.", command)
}

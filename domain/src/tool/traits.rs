//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async window-manager port is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Extra arguments are tolerated: small local models often pass an empty
/// `arguments` to tools that take none.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                None | Some(serde_json::Value::Null) if param.required => {
                    return Err(format!(
                        "Missing required parameter '{}' for tool '{}'",
                        param.name, definition.name
                    ));
                }
                Some(value) if param.param_type == "string" && !is_scalar(value) => {
                    return Err(format!(
                        "Parameter '{}' for tool '{}' must be a string",
                        param.name, definition.name
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

fn is_scalar(value: &serde_json::Value) -> bool {
    !matches!(
        value,
        serde_json::Value::Array(_) | serde_json::Value::Object(_)
    )
}

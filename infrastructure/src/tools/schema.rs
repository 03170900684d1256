//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing the OpenAI-style
//! function format that Ollama's native tool calling expects.

use swaytalk_application::ToolSchemaPort;
use swaytalk_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Converts tool definitions to `{"type": "function", "function": {...}}`.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": schema_type,
                    "description": param.description,
                }),
            );

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaytalk_domain::CommandCatalog;
    use swaytalk_domain::dispatch::protocol::tool_spec;
    use swaytalk_domain::tool::entities::ToolParameter;

    #[test]
    fn test_tool_to_schema() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("execute_code", "Execute a sway command")
            .with_parameter(ToolParameter::new("tool_name", "Command name", true))
            .with_parameter(ToolParameter {
                param_type: "integer".to_string(),
                ..ToolParameter::new("repeat", "How many times", false)
            });

        let schema = converter.tool_to_schema(&tool);

        assert_eq!(schema["type"], "function");
        let function = &schema["function"];
        assert_eq!(function["name"], "execute_code");
        assert_eq!(function["description"], "Execute a sway command");
        assert_eq!(function["parameters"]["type"], "object");
        assert_eq!(
            function["parameters"]["properties"]["tool_name"]["type"],
            "string"
        );
        assert_eq!(
            function["parameters"]["properties"]["repeat"]["type"],
            "integer"
        );

        let required = function["parameters"]["required"].as_array().unwrap();
        assert_eq!(required, &vec![serde_json::json!("tool_name")]);
    }

    #[test]
    fn test_all_tools_schema_sorted() {
        let converter = JsonSchemaToolConverter;
        let spec = tool_spec(&CommandCatalog::builtin(), false);

        let tools = converter.all_tools_schema(&spec);
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t["function"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["execute_code", "get_docstring"]);
    }

    #[test]
    fn test_stub_tools_have_no_parameters() {
        let converter = JsonSchemaToolConverter;
        let spec = tool_spec(&CommandCatalog::builtin(), true);

        let tools = converter.all_tools_schema(&spec);
        assert_eq!(tools.len(), 22);

        let focus = tools
            .iter()
            .find(|t| t["function"]["name"] == "focus")
            .unwrap();
        assert_eq!(focus["function"]["description"], "Focus a window or workspace");
        assert!(
            focus["function"]["parameters"]["required"]
                .as_array()
                .unwrap()
                .is_empty()
        );
    }
}

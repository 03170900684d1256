//! Prompt templates for the agent session

use crate::catalog::CommandCatalog;
use crate::dispatch::policy::DescribePolicy;
use crate::dispatch::protocol::{EXECUTE_CODE, GET_DOCSTRING, PARAM_ARGUMENTS, PARAM_TOOL_NAME};

/// Templates for generating session prompts
pub struct SessionPromptTemplate;

impl SessionPromptTemplate {
    /// System instruction constraining the model to tool calls.
    ///
    /// When command stubs are not exposed as tools, the catalog summaries are
    /// listed inline so the model still knows which names exist.
    pub fn system(catalog: &CommandCatalog, expose_stubs: bool, policy: DescribePolicy) -> String {
        let mut prompt = format!(
            r#"You are an LLM agent that runs commands to manage the Sway window manager.
This is VERY IMPORTANT: your response should be brief, and only contain tool calls.

IMPORTANT: You must follow this exact TWO-STEP PROCESS for every tool you use:

STEP 1: First get the tool's documentation by calling {describe}
    Example: {describe}({name_param}="focus")

STEP 2: After reviewing the documentation, execute the tool with proper arguments
    Example: {execute}({name_param}="focus", {args_param}="next")

DO NOT try to call any tool directly without first getting its documentation.
If a user asks you to perform an action like "focus on the next window", you MUST:
1. First call {describe} for the relevant tool ({describe}({name_param}="focus"))
2. Then call {execute} with the proper arguments ({execute}({name_param}="focus", {args_param}="next"))
"#,
            describe = GET_DOCSTRING,
            execute = EXECUTE_CODE,
            name_param = PARAM_TOOL_NAME,
            args_param = PARAM_ARGUMENTS,
        );

        if policy.is_enforced() {
            prompt.push_str(&format!(
                "{} refuses any tool whose documentation you have not retrieved in this conversation.\n",
                EXECUTE_CODE
            ));
        }

        if !expose_stubs {
            prompt.push_str("\nAvailable tools:\n");
            for command in catalog.iter() {
                prompt.push_str(&format!("- {}: {}\n", command.name, command.summary));
            }
        }

        prompt.push_str(
            r#"
Remember: All outputs are strings. Only use the tools provided.
**VERY IMPORTANT**:
THE OUTPUTS SHOULD ONLY BE TOOL CALLS.
DO NOT OUTPUT ANYTHING OTHER THAN CALL TOOLS.
DO NOT PROVIDE MULTIPLE EXAMPLES, FOCUS ON ONLY EXECUTING THE BEST ACTION.

When what the user requested is ambiguous, assume that they are talking about the focused window and execute the most likely desired action.
If no tool can do what the user asked, reply in one short sentence without calling a tool."#,
        );

        prompt
    }

    /// Human message carrying the user's request.
    pub fn user_input(input: &str) -> String {
        input.trim().to_string()
    }
}

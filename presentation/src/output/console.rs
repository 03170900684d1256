//! Console output formatter for session results and catalog listings

use colored::Colorize;
use swaytalk_application::{RunSessionOutput, Termination};
use swaytalk_domain::dispatch::protocol::describe_text;
use swaytalk_domain::{CatalogError, CommandCatalog};

/// Formats session results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-readable outcome: the model's final message, or a summary of
    /// what was applied when the model said nothing.
    pub fn format(output: &RunSessionOutput) -> String {
        let mut text = String::new();
        let message = output.final_message.trim();

        if !message.is_empty() {
            text.push_str(message);
            text.push('\n');
        } else if output.commands_applied.is_empty() {
            text.push_str(&format!("{}\n", "No commands were applied.".dimmed()));
        } else {
            text.push_str(&format!("{}\n", "Applied:".cyan().bold()));
            for command in &output.commands_applied {
                text.push_str(&format!("  {} {}\n", "v".green(), command));
            }
        }

        if output.terminated_by == Termination::TurnLimit {
            text.push_str(&format!(
                "{} stopped after {} turns without a final answer\n",
                "warning:".yellow().bold(),
                output.turns
            ));
        }

        text
    }

    /// Format as JSON
    pub fn format_json(output: &RunSessionOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// One line per catalog entry, for `--list`.
    pub fn format_catalog(catalog: &CommandCatalog) -> String {
        let width = catalog.names().map(str::len).max().unwrap_or(0);
        catalog
            .iter()
            .map(|spec| format!("{:<width$}  {}\n", spec.name.bold(), spec.summary))
            .collect()
    }

    /// Full documentation for `--describe`.
    pub fn format_describe(catalog: &CommandCatalog, name: &str) -> Result<String, CatalogError> {
        catalog.lookup(name.trim()).map(describe_text)
    }

    /// Render a fatal error for stderr.
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "error:".red().bold(), message)
    }
}

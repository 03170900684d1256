//! Progress reporting for agent sessions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use swaytalk_application::{RunSessionOutput, SessionProgressNotifier};
use swaytalk_domain::{ToolCall, ToolResult, preview};

/// Spinner on stderr that follows the session turn by turn
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Short description of a tool call, e.g. `execute_code focus next`.
pub fn describe_call(call: &ToolCall) -> String {
    let target = call.get_text("tool_name").unwrap_or_default();
    let args = call.get_text("arguments").unwrap_or_default();
    let summary = [call.tool_name.as_str(), target.as_str(), args.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    preview(&summary, 60)
}

impl SessionProgressNotifier for ProgressReporter {
    fn on_session_start(&self, input: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("swaytalk");
        pb.set_message(preview(input, 60));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_model_request(&self, turn: usize) {
        self.with_spinner(|pb| {
            pb.set_prefix(format!("turn {}", turn));
            pb.set_message("thinking...");
        });
    }

    fn on_tool_call(&self, call: &ToolCall) {
        let message = describe_call(call);
        self.with_spinner(|pb| pb.set_message(message));
    }

    fn on_tool_result(&self, call: &ToolCall, result: &ToolResult) {
        if result.is_success() {
            return;
        }
        let line = format!(
            "  {} {}: {}",
            "x".red(),
            describe_call(call),
            preview(&result.to_model_text(), 80)
        );
        self.with_spinner(|pb| pb.println(line));
    }

    fn on_command_applied(&self, command: &str) {
        let line = format!("  {} {}", "v".green(), command);
        self.with_spinner(|pb| pb.println(line));
    }

    fn on_session_end(&self, _output: &RunSessionOutput) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl SessionProgressNotifier for SimpleProgress {
    fn on_model_request(&self, turn: usize) {
        eprintln!("{} turn {}", "->".cyan(), turn);
    }

    fn on_tool_call(&self, call: &ToolCall) {
        eprintln!("  {} {}", "*".dimmed(), describe_call(call));
    }

    fn on_tool_result(&self, _call: &ToolCall, result: &ToolResult) {
        if !result.is_success() {
            eprintln!("  {} {}", "x".red(), preview(&result.to_model_text(), 80));
        }
    }

    fn on_command_applied(&self, command: &str) {
        eprintln!("  {} {}", "v".green(), command);
    }
}

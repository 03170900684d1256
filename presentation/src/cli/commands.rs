//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for session results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The model's final message (or a summary of applied commands)
    Text,
    /// Full session outcome as JSON
    Json,
}

/// CLI arguments for swaytalk
#[derive(Parser, Debug)]
#[command(name = "swaytalk")]
#[command(author, version, about = "Control sway with natural language")]
#[command(long_about = r#"
swaytalk turns a plain-language request into sway commands.

A local model (served by Ollama) reads the request, looks up the grammar of
the commands it needs with get_docstring, and then issues them with
execute_code. Every command goes through the sway IPC socket.

Input is taken from (in priority order):
1. The positional argument
2. Standard input (--stdin)
3. A dmenu-style launcher (--launcher or [input] launcher)

Configuration files are loaded from (in priority order):
1. SWAYTALK_* environment variables
2. --config <path>                   Explicit config file
3. ./swaytalk.toml                   Project-level config
4. ~/.config/swaytalk/config.toml    Global config

Example:
  swaytalk "move this window to workspace 3"
  swaytalk --launcher 'fuzzel -d -p "> "'
  swaytalk --dry-run -v "make the gaps bigger"
  swaytalk --describe gaps
"#)]
pub struct Cli {
    /// The request to interpret
    pub question: Option<String>,

    /// Read the request from standard input
    #[arg(long, conflicts_with = "question")]
    pub stdin: bool,

    /// dmenu-style command whose output is the request
    #[arg(long, value_name = "COMMAND")]
    pub launcher: Option<String>,

    /// List the available sway commands and exit
    #[arg(long, conflicts_with = "describe")]
    pub list: bool,

    /// Print the documentation for one command and exit
    #[arg(long, value_name = "NAME")]
    pub describe: Option<String>,

    /// Record commands instead of sending them to sway
    #[arg(long)]
    pub dry_run: bool,

    /// Model to use (overrides [model] name)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_request_with_flags() {
        let cli = Cli::try_parse_from(["swaytalk", "-vv", "--dry-run", "focus next"]).unwrap();

        assert_eq!(cli.question.as_deref(), Some("focus next"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.dry_run);
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_stdin_conflicts_with_question() {
        assert!(Cli::try_parse_from(["swaytalk", "--stdin", "focus next"]).is_err());
    }

    #[test]
    fn test_describe_and_list_conflict() {
        assert!(Cli::try_parse_from(["swaytalk", "--list", "--describe", "gaps"]).is_err());
        let cli = Cli::try_parse_from(["swaytalk", "--describe", "gaps"]).unwrap();
        assert_eq!(cli.describe.as_deref(), Some("gaps"));
    }
}

//! Presentation layer for swaytalk
//!
//! This crate contains the CLI definition, input capture, output formatters
//! and progress reporters.

pub mod cli;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use input::{InputError, InputSource, capture};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};

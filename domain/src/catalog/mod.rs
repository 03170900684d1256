//! Command catalog — the closed set of window-manager operations
//!
//! The catalog is a static table of plain data records built at startup and
//! never mutated. Each [`CommandSpec`] carries a one-line summary for
//! low-context listings, a full grammar document for on-demand retrieval, and
//! an [`Invocation`] rule describing how an argument becomes an IPC command.
//!
//! ```text
//! ┌──────────────┐ lookup  ┌─────────────┐ command_for ┌──────────────────┐
//! │ tool_name    │───────▶│ CommandSpec │────────────▶│ "focus next"     │
//! └──────────────┘         └─────────────┘             └──────────────────┘
//! ```
//!
//! # Built-in Entries
//!
//! [`CommandCatalog::builtin`] exposes the twenty operations the agent may
//! drive. `exit`, `reload` and `scratchpad` take no argument and always send
//! a fixed literal; every other entry prefixes its keyword.

pub mod command;
pub mod grammar;
pub mod normalize;

pub use command::{CommandSpec, Invocation};

use crate::core::error::CatalogError;
use std::collections::HashSet;

/// The built-in catalog table, in listing order.
pub static BUILTIN_COMMANDS: [CommandSpec; 20] = [
    CommandSpec::keyword("focus", "Focus a window or workspace", grammar::FOCUS),
    CommandSpec::keyword("move", "Move a window", grammar::MOVE),
    CommandSpec::keyword("fullscreen", "Toggle fullscreen mode for a window", grammar::FULLSCREEN),
    CommandSpec::fixed("exit", "Exit Sway", grammar::EXIT, "exit"),
    CommandSpec::fixed("reload", "Reload Sway configuration", grammar::RELOAD, "reload"),
    CommandSpec::keyword("split", "Change split direction", grammar::SPLIT),
    CommandSpec::keyword("floating", "Toggle floating mode for a window", grammar::FLOATING),
    CommandSpec::keyword("layout", "Change the layout of the current workspace", grammar::LAYOUT),
    CommandSpec::keyword("border", "Set border style", grammar::BORDER),
    CommandSpec::keyword("gaps", "Change inner or outer gaps", grammar::GAPS),
    CommandSpec::keyword("inhibit_idle", "Set or unset idle inhibitor", grammar::INHIBIT_IDLE),
    CommandSpec::keyword(
        "max_render_time",
        "Controls when a window is rendered",
        grammar::MAX_RENDER_TIME,
    ),
    CommandSpec::keyword("allow_tearing", "Allow or disallow tearing", grammar::ALLOW_TEARING),
    CommandSpec::keyword("rename", "Rename a workspace", grammar::RENAME),
    CommandSpec::keyword("resize", "Resize a window", grammar::RESIZE),
    CommandSpec::fixed(
        "scratchpad",
        "Show the scratchpad",
        grammar::SCRATCHPAD,
        "scratchpad show",
    ),
    CommandSpec::keyword(
        "shortcuts_inhibitor",
        "Toggle ability to inhibit shortcuts",
        grammar::SHORTCUTS_INHIBITOR,
    ),
    CommandSpec::keyword("sticky", "Sticky a window", grammar::STICKY),
    CommandSpec::keyword("swap", "Swap containers", grammar::SWAP),
    CommandSpec::keyword("title_format", "Set format for window titles", grammar::TITLE_FORMAT),
];

/// Read-only registry of [`CommandSpec`]s keyed by name.
///
/// Cheap to copy: it only borrows a `'static` table.
#[derive(Debug, Clone, Copy)]
pub struct CommandCatalog {
    entries: &'static [CommandSpec],
}

impl CommandCatalog {
    /// Build a catalog over `entries`, rejecting duplicate or empty names.
    pub fn new(entries: &'static [CommandSpec]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(entry.name) {
                return Err(CatalogError::DuplicateName(entry.name.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in sway catalog.
    pub fn builtin() -> Self {
        // BUILTIN_COMMANDS is checked for uniqueness by tests
        Self {
            entries: &BUILTIN_COMMANDS,
        }
    }

    /// Look up an entry by exact name.
    pub fn lookup(&self, name: &str) -> Result<&'static CommandSpec, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::NotFound {
            name: name.to_string(),
            available: self.names().map(str::to_string).collect(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&'static CommandSpec> {
        let entries = self.entries;
        entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Normalize `raw` for the command `name`.
    pub fn normalize(&self, name: &str, raw: &str) -> Result<String, CatalogError> {
        self.lookup(name).map(|spec| spec.command_for(raw))
    }

    /// Entries in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &'static CommandSpec> + use<> {
        let entries = self.entries;
        entries.iter()
    }

    /// Names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        let entries = self.entries;
        entries.iter().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

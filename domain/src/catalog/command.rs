//! Catalog entry type

use super::normalize;

/// How a catalog entry turns an argument string into an IPC command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// The argument is prefixed with the command keyword (once).
    Keyword,
    /// The command ignores its argument and always sends this literal.
    Fixed(&'static str),
}

/// One entry of the command catalog (immutable, lives for the process).
///
/// Identity is [`name`](Self::name): it doubles as the tool name the agent
/// refers to and, for [`Invocation::Keyword`] entries, as the command keyword
/// sent to the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Unique command name (e.g. "focus")
    pub name: &'static str,
    /// One-line description for low-context listings
    pub summary: &'static str,
    /// Full grammar document returned on demand
    pub grammar: &'static str,
    /// Normalization rule and handler binding
    pub invocation: Invocation,
}

impl CommandSpec {
    /// Entry whose argument is sent as `<name> <argument>`.
    pub const fn keyword(name: &'static str, summary: &'static str, grammar: &'static str) -> Self {
        Self {
            name,
            summary,
            grammar,
            invocation: Invocation::Keyword,
        }
    }

    /// Zero-argument entry that always sends `literal`.
    pub const fn fixed(
        name: &'static str,
        summary: &'static str,
        grammar: &'static str,
        literal: &'static str,
    ) -> Self {
        Self {
            name,
            summary,
            grammar,
            invocation: Invocation::Fixed(literal),
        }
    }

    /// Whether the command takes an argument string.
    pub fn requires_argument(&self) -> bool {
        matches!(self.invocation, Invocation::Keyword)
    }

    /// Build the exact command string for the window manager.
    pub fn command_for(&self, argument: &str) -> String {
        match self.invocation {
            Invocation::Fixed(literal) => literal.to_string(),
            Invocation::Keyword => normalize::prefix_keyword(self.name, argument),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_command_ignores_argument() {
        let spec = CommandSpec::fixed("scratchpad", "Show the scratchpad", "", "scratchpad show");
        assert!(!spec.requires_argument());
        assert_eq!(spec.command_for(""), "scratchpad show");
        assert_eq!(spec.command_for("hide"), "scratchpad show");
    }

    #[test]
    fn test_keyword_command_prefixes() {
        let spec = CommandSpec::keyword("focus", "Focus a window", "");
        assert!(spec.requires_argument());
        assert_eq!(spec.command_for("next"), "focus next");
        assert_eq!(spec.command_for("focus next"), "focus next");
    }
}

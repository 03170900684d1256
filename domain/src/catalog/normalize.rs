//! Grammar normalization
//!
//! Ensures an argument string is prefixed with its command keyword exactly
//! once. Normalization never rejects input: malformed arguments are left for
//! the window manager to report.
//!
//! ```
//! use swaytalk_domain::catalog::normalize::prefix_keyword;
//!
//! assert_eq!(prefix_keyword("move", "container to workspace 3"), "move container to workspace 3");
//! assert_eq!(prefix_keyword("move", "move container to workspace 3"), "move container to workspace 3");
//! ```

/// Prefix `raw` with `keyword` unless one of its tokens already is the keyword.
///
/// Line breaks are flattened to spaces and surrounding whitespace is trimmed,
/// so the result is always a single-line command. Idempotent.
pub fn prefix_keyword(keyword: &str, raw: &str) -> String {
    let flattened = single_line(raw);
    let argument = flattened.trim();

    if argument.is_empty() {
        return keyword.to_string();
    }

    if contains_keyword(argument, keyword) {
        argument.to_string()
    } else {
        format!("{} {}", keyword, argument)
    }
}

/// Whether any whitespace-separated token of `argument` equals `keyword`.
pub fn contains_keyword(argument: &str, keyword: &str) -> bool {
    argument.split_whitespace().any(|token| token == keyword)
}

/// Whether `command` chains further commands with `;` or `,`.
///
/// Separators inside quotes or `[...]` criteria do not count.
pub fn chains_commands(command: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut in_criteria = false;
    let mut escaped = false;

    for c in command.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => in_criteria = true,
            (None, ']') => in_criteria = false,
            (None, ';' | ',') if !in_criteria => return true,
            _ => {}
        }
    }
    false
}

fn single_line(raw: &str) -> String {
    raw.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

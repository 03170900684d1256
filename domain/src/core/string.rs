//! String utilities for the domain layer.

/// Single-line preview of `s`, at most `max_chars` characters.
///
/// Line breaks are collapsed to spaces; truncated previews end with `…`.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if flat.chars().count() <= max_chars {
        flat
    } else {
        let truncated: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(preview("focus next", 20), "focus next");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(preview("Documentation for focus:\n   focus up", 80), "Documentation for focus: focus up");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let result = preview(&"a".repeat(100), 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with('…'));
    }

    #[test]
    fn test_multibyte_safe() {
        let result = preview("ウィンドウを全画面にする", 5);
        assert_eq!(result.chars().count(), 5);
    }
}

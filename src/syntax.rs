//! Line-shape predicates shared by normalization and parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|(\s*:?-+:?\s*\|)+$").expect("valid regex for table separator rows")
});

/// Strip surrounding whitespace and byte order marks from a line.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// A trimmed line made of 3+ identical `-`, `*` or `_` characters.
pub(crate) fn is_horizontal_rule(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_') && trimmed.chars().count() >= 3 && chars.all(|c| c == first)
}

/// A trimmed line that both starts and ends with a pipe; a lone `|` counts.
pub(crate) fn is_pipe_wrapped(trimmed: &str) -> bool {
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// A table alignment row such as `| --- | :-: |`.
pub(crate) fn is_separator_row(trimmed: &str) -> bool {
    SEPARATOR_ROW.is_match(trimmed)
}

/// A trimmed line opening or closing a fenced code block.
pub(crate) fn fence_info(trimmed: &str) -> Option<&str> {
    trimmed.strip_prefix("```").map(str::trim)
}

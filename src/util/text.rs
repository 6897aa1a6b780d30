// src/util/text.rs

/// First non-empty line of a note body, trimmed. Listings show a
/// one-line preview instead of the full content.
pub fn first_line(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Truncate to at most `max_chars` characters, appending an ellipsis
/// when anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}…")
}

/// Shorten `s` to at most `max_chars` characters, ending in `...` when cut.
#[must_use]
pub fn truncate_for_display(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let cut = s.char_indices().nth(keep).map_or(s.len(), |(idx, _)| idx);
    format!("{}...", &s[..cut])
}

/// Whitespace-delimited token count of the trimmed text.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

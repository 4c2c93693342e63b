const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens user utterances for logging. Truncation happens on a char
/// boundary so multi-byte transcripts never panic the logger.
pub fn sanitize_query(query: &str) -> String {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..cut],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    }
}

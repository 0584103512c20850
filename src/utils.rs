/// Maximum number of body characters kept for diagnostics
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Keep the first `max_chars` characters of `text`, never splitting a
/// UTF-8 sequence
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Initialize logging to stderr, `info` unless RUST_LOG says otherwise
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

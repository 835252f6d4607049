//! Shared text helpers.

/// Truncates `input` to at most `max_chars` Unicode scalar values.
///
/// Never splits a character; returns a borrowed prefix of the input.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &input[..byte_idx],
        None => input,
    }
}

/// Masks a secret for display, keeping only a short prefix.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let visible = truncate_chars(secret, 4);
    if visible.len() == secret.len() {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}

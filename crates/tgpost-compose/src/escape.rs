//! MarkdownV2 escaping for caption text.
//!
//! Escaping is a one-shot transform over plain text: running it twice adds a
//! second layer of backslashes.

/// Characters that must be preceded by a backslash in MarkdownV2 text.
pub const MARKDOWN_V2_SPECIAL: &[char] = &[
    '_', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

const NBSP: char = '\u{a0}';

/// Escapes optional text; `None` and `""` both yield an empty string.
pub fn escape_markdown(text: Option<&str>) -> String {
    text.map_or_else(String::new, escape_markdown_str)
}

/// Replaces non-breaking spaces with plain spaces and escapes every
/// MarkdownV2 special character.
pub fn escape_markdown_str(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        let c = if c == NBSP { ' ' } else { c };
        if MARKDOWN_V2_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes the target of an inline link, where only `)` and `\` are special.
pub fn escape_link_url(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if c == ')' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_every_special_character() {
        for c in MARKDOWN_V2_SPECIAL {
            assert_eq!(escape_markdown_str(&format!("a{c}b")), format!("a\\{c}b"));
        }
    }

    #[test]
    fn test_empty_and_absent() {
        assert_eq!(escape_markdown(None), "");
        assert_eq!(escape_markdown(Some("")), "");
    }

    #[test]
    fn test_nbsp_becomes_space() {
        assert_eq!(escape_markdown_str("500\u{a0}000"), "500 000");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_markdown_str("Велосипед *new*"), "Велосипед *new*");
    }

    #[test]
    fn test_not_idempotent() {
        let once = escape_markdown_str("a.b");
        assert_eq!(once, "a\\.b");
        assert_eq!(escape_markdown_str(&once), "a\\\\.b");
    }

    #[test]
    fn test_escape_link_url() {
        assert_eq!(
            escape_link_url("https://avito.ru/a_(b)"),
            "https://avito.ru/a_(b\\)"
        );
        assert_eq!(escape_link_url("https://x/\\"), "https://x/\\\\");
    }
}

//! String slicing helpers shared by the config parser and the tree builder.
//!
//! Splitting follows the rules mpv's `input.conf` tooling has always used:
//! leading separator characters are skipped, and the remainder keeps the
//! separator it was cut at. Both properties are relied upon by the menu path
//! grammar (`Foo > Bar #comment`).

/// Characters treated as whitespace by the configuration grammar.
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\u{b}', '\u{c}'];

/// Splits `text` at the first character contained in `separators`.
///
/// Leading separator characters are skipped first. The second half keeps the
/// separator it was split at, so `split("a>b", &['>'])` is `("a", ">b")`.
pub fn split<'a>(text: &'a str, separators: &[char]) -> (&'a str, &'a str) {
    let text = text.trim_start_matches(separators);

    match text.find(separators) {
        Some(end) => text.split_at(end),
        None => (text, ""),
    }
}

/// Removes surrounding [`WHITESPACE`].
pub fn strip(text: &str) -> &str {
    text.trim_matches(WHITESPACE)
}

/// Removes leading [`WHITESPACE`].
pub fn lstrip(text: &str) -> &str {
    text.trim_start_matches(WHITESPACE)
}

/// Removes trailing [`WHITESPACE`].
pub fn rstrip(text: &str) -> &str {
    text.trim_end_matches(WHITESPACE)
}

/// Strips `prefix` from the start of `text`, returning the rest.
pub fn eat_start<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.strip_prefix(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_separator() {
        assert_eq!(split("Foo > Bar", &['>']), ("Foo ", "> Bar"));
        assert_eq!(split("> Bar", &['>']), (" Bar", ""));
    }

    #[test]
    fn test_split_skips_leading_separators() {
        assert_eq!(split("##@chapters", &['#']), ("@chapters", ""));
        assert_eq!(split("  Ctrl+a  cmd", WHITESPACE), ("Ctrl+a", "  cmd"));
    }

    #[test]
    fn test_split_without_separator() {
        assert_eq!(split("Foo", &['>']), ("Foo", ""));
        assert_eq!(split("", &['>']), ("", ""));
    }

    #[test]
    fn test_strip() {
        assert_eq!(strip("\t foo \r\n"), "foo");
        assert_eq!(lstrip("  foo "), "foo ");
        assert_eq!(rstrip("  foo "), "  foo");
    }
}

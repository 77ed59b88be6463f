use crate::types::Mode;

pub fn clean_for_mode(input: &str, mode: Mode) -> &str {
    clean_with_offset(input, mode).0
}

/// Like [`clean_for_mode`], also returning how many leading chars were dropped.
pub fn clean_with_offset(input: &str, mode: Mode) -> (&str, usize) {
    match mode {
        Mode::Strict => (input, 0),
        Mode::Lenient => {
            let start = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
            let dropped = input.len() - start.len();
            (start.trim_end_matches(|c: char| c.is_ascii_whitespace()), dropped)
        }
    }
}

/// Strips `prefix` from the front of `input`, ignoring ASCII case.
pub fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_for_mode_strict() {
        assert_eq!(clean_for_mode(" abc\n", Mode::Strict), " abc\n");
    }

    #[test]
    fn test_clean_for_mode_lenient() {
        assert_eq!(clean_for_mode(" \tabc d\n", Mode::Lenient), "abc d");
    }

    #[test]
    fn test_clean_with_offset_counts_leading_whitespace() {
        assert_eq!(clean_with_offset("  \tabc \n", Mode::Lenient), ("abc", 3));
        assert_eq!(clean_with_offset("  abc", Mode::Strict), ("  abc", 0));
    }

    #[test]
    fn test_strip_prefix_ignore_case() {
        assert_eq!(strip_prefix_ignore_case("URN:uuid:abc", "urn:uuid:"), Some("abc"));
        assert_eq!(strip_prefix_ignore_case("urn:uuid:", "urn:uuid:"), Some(""));
        assert_eq!(strip_prefix_ignore_case("urn:x", "urn:uuid:"), None);
    }

    #[test]
    fn test_strip_prefix_non_char_boundary() {
        assert_eq!(strip_prefix_ignore_case("urn:uuid\u{e9}x", "urn:uuid:"), None);
    }
}

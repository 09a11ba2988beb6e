//! SlideDeck Library
//!
//! Core library for the SlideDeck desktop application.

pub mod app;
pub mod attachments;
pub mod i18n;
pub mod storage;
pub mod types;
pub mod ui;

/// Safely truncate a string at a char boundary, never panics.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    // Walk backwards from max_bytes to find a valid char boundary
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("short", 100), "short");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "演示" is 6 bytes; cutting at 4 must back off to the char boundary
        assert_eq!(truncate_str("演示", 4), "演");
    }
}

// file: src/utils/validation.rs
// description: input validation helpers
// reference: input validation patterns

use crate::error::{HubError, Result};

pub struct Validator;

impl Validator {
    /// Feed sources must be http(s) URLs; anything else is a config mistake.
    pub fn validate_feed_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(HubError::Validation(format!("Invalid feed URL: {}", url)));
        }
        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(HubError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    /// Truncates to at most `max_bytes`, backing up to a char boundary so
    /// multi-byte article text never splits.
    pub fn truncate_text(text: &str, max_bytes: usize) -> String {
        if text.len() <= max_bytes {
            return text.to_string();
        }

        let mut end = max_bytes;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_feed_url() {
        assert!(Validator::validate_feed_url("https://krebsonsecurity.com/feed/").is_ok());
        assert!(Validator::validate_feed_url("http://example.com/rss").is_ok());
        assert!(Validator::validate_feed_url("ftp://example.com/rss").is_err());
        assert!(Validator::validate_feed_url("not a url").is_err());
    }

    #[test]
    fn test_validate_content_not_empty() {
        assert!(Validator::validate_content_not_empty("content").is_ok());
        assert!(Validator::validate_content_not_empty("").is_err());
        assert!(Validator::validate_content_not_empty("   ").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(Validator::truncate_text("this is a very long text", 10), "this is a ...");
    }

    #[test]
    fn test_truncate_text_respects_char_boundaries() {
        // 中 is three bytes; cutting at 4 must back up to the boundary
        let truncated = Validator::truncate_text("中文字符", 4);
        assert_eq!(truncated, "中...");
    }
}

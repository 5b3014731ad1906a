use anyhow::Result;
use url::Url;

/// Validate a URL and return normalized version
pub fn validate_and_normalize_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid URL format: {}", url))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("URL must use HTTP or HTTPS protocol");
    }

    Ok(parsed.to_string())
}

/// Shorten a string to at most `max_chars` characters for error context
pub fn truncate_snippet(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_and_normalize_url() {
        assert!(validate_and_normalize_url("https://example.com").is_ok());
        assert!(validate_and_normalize_url("http://example.com").is_ok());
        assert!(validate_and_normalize_url("ftp://example.com").is_err());
        assert!(validate_and_normalize_url("not-a-url").is_err());
    }

    #[test]
    fn test_normalized_url_keeps_query() {
        let url = validate_and_normalize_url("https://www.youtube.com/watch?v=abc").unwrap();
        assert_eq!(url, "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_truncate_snippet_short_input_unchanged() {
        assert_eq!(truncate_snippet("short", 80), "short");
    }

    #[test]
    fn test_truncate_snippet_bounds_long_input() {
        let long = "x".repeat(200);
        let truncated = truncate_snippet(&long, 80);
        assert_eq!(truncated.chars().count(), 80);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_snippet_is_char_safe() {
        let s = "é".repeat(100);
        let truncated = truncate_snippet(&s, 10);
        assert_eq!(truncated.chars().count(), 10);
    }
}

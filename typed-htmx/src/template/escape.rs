//! HTML escaping for text and attribute contexts

/// Escape a string for use in HTML content
#[must_use]
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in a double-quoted attribute value
#[must_use]
pub fn escape_double_quoted(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in a single-quoted attribute value
///
/// Double quotes are left alone so JSON stays readable inside `'...'`.
#[must_use]
pub fn escape_single_quoted(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
        assert_eq!(escape_text("a & b"), "a &amp; b");
        assert_eq!(escape_text(r#""quoted" 'too'"#), r#""quoted" 'too'"#);
    }

    #[test]
    fn test_escape_double_quoted() {
        assert_eq!(escape_double_quoted("\"test\""), "&quot;test&quot;");
        assert_eq!(escape_double_quoted("it's"), "it&#39;s");
        assert_eq!(escape_double_quoted("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_single_quoted() {
        assert_eq!(
            escape_single_quoted(r#"{"foo":"It's joever"}"#),
            r#"{"foo":"It&#39;s joever"}"#
        );
        assert_eq!(escape_single_quoted("<a>"), "&lt;a&gt;");
    }
}

//! HTML sanitization for backend-supplied page bodies.
//!
//! Page content originates from the merchant's own store, but it is
//! still treated as untrusted input: executable content is stripped
//! while formatting is preserved.

/// Sanitize untrusted HTML for display.
#[must_use]
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_tags() {
        let dirty = "<p>hello</p><script>alert('x')</script>";
        let clean = clean_html(dirty);
        assert!(clean.contains("<p>hello</p>"));
        assert!(!clean.contains("script"));
        assert!(!clean.contains("alert"));
    }

    #[test]
    fn strips_event_handlers() {
        let dirty = r#"<a href="/about" onclick="steal()">About</a>"#;
        let clean = clean_html(dirty);
        assert!(!clean.contains("onclick"));
        assert!(clean.contains("About"));
    }

    #[test]
    fn preserves_formatting() {
        let body = "<h2>Our Story</h2><p>We make <strong>great</strong> things.</p><ul><li>One</li></ul>";
        let clean = clean_html(body);
        assert!(clean.contains("<h2>"));
        assert!(clean.contains("<strong>great</strong>"));
        assert!(clean.contains("<li>One</li>"));
    }
}

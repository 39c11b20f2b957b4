use regex::Regex;

/// Text normalizer applied before sentiment scoring.
///
/// Patterns are compiled once and reused across the batch.
pub struct TextNormalizer {
    url_regex: Regex,
    marker_regex: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            // A URL run extends from the scheme/www marker to the next whitespace.
            url_regex: Regex::new(r"http\S+|www\S+").unwrap(),
            marker_regex: Regex::new(r"[@#]").unwrap(),
        }
    }

    /// Strip URLs and `@`/`#` marker characters (the word itself is kept),
    /// then collapse all whitespace to single spaces and trim.
    pub fn clean(&self, text: &str) -> String {
        let no_urls = self.url_regex.replace_all(text, "");
        let no_markers = self.marker_regex.replace_all(&no_urls, "");
        no_markers.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_http_and_https_urls() {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.clean("check https://example.com/page and http://foo.bar now");
        assert_eq!(cleaned, "check and now");
        assert!(!cleaned.contains("http"));
    }

    #[test]
    fn removes_www_urls() {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.clean("visit www.example.com today");
        assert_eq!(cleaned, "visit today");
        assert!(!cleaned.contains("www"));
    }

    #[test]
    fn removes_urls_glued_to_other_text() {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.clean("link:http://example.com/x rest");
        assert!(!cleaned.contains("http"));
        assert!(cleaned.contains("rest"));
    }

    #[test]
    fn strips_mention_and_hashtag_markers_keeping_words() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.clean("#rust is @awesome according to @someone"),
            "rust is awesome according to someone"
        );
    }

    #[test]
    fn collapses_whitespace() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean("  a\n\n b\t\tc  "), "a b c");
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_string() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean(""), "");
        assert_eq!(normalizer.clean("   \n\t "), "");
    }

    #[test]
    fn url_only_input_yields_empty_string() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean("https://example.com"), "");
    }
}

//! Configuration options for content extraction.
//!
//! The `Options` struct carries the two heuristic constants, the base URL
//! used for link and image resolution, and the patterns that recognize
//! archive-proxy links and titled paragraphs.

use crate::patterns::DEFAULT_ARCHIVE_PATTERN;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_jparser::Options;
///
/// let options = Options {
///     url: Some("https://example.com/articles/".to_string()),
///     impurity_threshold: 40,
///     ..Options::default()
/// };
/// assert!((options.anchor_ratio_limit - 0.3).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL of the page, used to resolve relative links and image sources.
    ///
    /// An empty string is treated the same as `None`.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Minimum non-whitespace length for a text fragment whose parent is
    /// neither the winner tag nor a list item.
    ///
    /// Shorter fragments are treated as incidental noise and dropped.
    ///
    /// Default: `30`
    pub impurity_threshold: usize,

    /// Maximum share of anchor text in a paragraph or list item before its
    /// anchors are unwrapped into plain text.
    ///
    /// Compared as `anchor_len / (text_len + 1)`.
    ///
    /// Default: `0.3`
    pub anchor_ratio_limit: f64,

    /// Regular expression matching an archive-proxy URL. Capture group 1
    /// must hold the original URL, which replaces the whole match.
    ///
    /// Default: timestamped web.archive.org wrapper
    pub archive_pattern: String,

    /// Class value marking a paragraph as an explicit title candidate.
    ///
    /// Default: `"title"`
    pub title_class: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            impurity_threshold: 30,
            anchor_ratio_limit: 0.3,
            archive_pattern: DEFAULT_ARCHIVE_PATTERN.to_string(),
            title_class: "title".to_string(),
        }
    }
}

impl Options {
    /// Base URL with surrounding whitespace removed, or `None` when unset or blank.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert!(opts.url.is_none());
        assert_eq!(opts.impurity_threshold, 30);
        assert!((opts.anchor_ratio_limit - 0.3).abs() < f64::EPSILON);
        assert_eq!(opts.archive_pattern, DEFAULT_ARCHIVE_PATTERN);
        assert_eq!(opts.title_class, "title");
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            impurity_threshold: 10,
            anchor_ratio_limit: 0.5,
            ..Options::default()
        };

        assert_eq!(opts.impurity_threshold, 10);
        assert!((opts.anchor_ratio_limit - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_url_ignores_blank_values() {
        let blank = Options {
            url: Some("   ".to_string()),
            ..Options::default()
        };
        assert_eq!(blank.base_url(), None);

        let set = Options {
            url: Some(" https://example.com/ ".to_string()),
            ..Options::default()
        };
        assert_eq!(set.base_url(), Some("https://example.com/"));
    }
}

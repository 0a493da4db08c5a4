//! URL Utility Functions
//!
//! Base URL validation, relative link resolution, and the archive-proxy
//! unwrapper that rewrites wrapped links back to their original target.

use std::borrow::Cow;

use regex::Regex;
use url::Url;

use crate::error::{Error, Result};

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse a configured base URL.
///
/// Any scheme that can act as a base (http, https, file, ...) is accepted.
pub fn parse_base_url(base: &str) -> Result<Url> {
    match Url::parse(base.trim()) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        Ok(_) => Err(Error::InvalidBaseUrl(format!("{base}: cannot be a base"))),
        Err(e) => Err(Error::InvalidBaseUrl(format!("{base}: {e}"))),
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// # Returns
/// * The absolute URL string, or the original if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    // Preserve special URLs unchanged
    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Resolve a link against an optional base URL.
///
/// Without a base the trimmed input is returned unchanged.
#[must_use]
pub fn resolve_url(url_str: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => create_absolute_url(url_str, base),
        None => url_str.trim().to_string(),
    }
}

/// Rewrites archive-proxy URLs to the URL they wrap.
///
/// The pattern is compiled once per extractor; capture group 1 holds the
/// original URL and replaces the whole match.
#[derive(Debug, Clone)]
pub struct ArchiveUnwrapper {
    pattern: Regex,
}

impl ArchiveUnwrapper {
    /// Compile an archive pattern. It must define capture group 1.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        if pattern.captures_len() < 2 {
            return Err(Error::InvalidPattern(format!(
                "{pattern}: capture group 1 must hold the original URL"
            )));
        }
        Ok(Self { pattern })
    }

    /// Strip the archive wrapper from `link`, if present.
    #[must_use]
    pub fn unwrap_url<'u>(&self, link: &'u str) -> Cow<'u, str> {
        self.pattern.replace(link, "${1}")
    }
}

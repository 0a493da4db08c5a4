//! Compiled regex patterns used across the extraction pipeline.
//!
//! Constant patterns are compiled once using `LazyLock`. Patterns that are
//! configurable (the archive-proxy prefix) are only stored here as source
//! text and compiled per `Extractor`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Default archive-proxy pattern.
///
/// Matches `http(s)://web.archive.org/web/<timestamp>[flag_]/<original>` and
/// captures the original URL, e.g.
/// `http://web.archive.org/web/20120510161402/http://www.mashable.com/tag/pinterest`.
pub const DEFAULT_ARCHIVE_PATTERN: &str =
    r"https?://web\.archive\.org/web/\d+(?:[a-z]{2}_)?/(.*)";

/// Attribute values that flag a hidden or auxiliary container.
pub const HIDDEN_CONTAINER_PATTERN: &str = r"(display:.?none|comment|measure)";

/// Pure formatting tags unwrapped during pre-cleaning.
pub const FORMATTING_TAG_PATTERN: &str = r"(span|section|font|em|i)";

/// Page title separators. Only the first segment is kept.
pub static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_-]").expect("TITLE_SEPARATOR regex"));

/// Runs of whitespace, collapsed to a single space when comparing text.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

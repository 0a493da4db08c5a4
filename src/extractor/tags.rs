//! Tag constants used by pre-cleaning, pruning and linearization.
//!
//! Arrays are kept for iteration and `strip_elements` calls; the sets give
//! O(1) lookup where a tag name is tested per node.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Pre-cleaning ===

/// Tags removed with their whole subtree before parsing the page tree.
pub static NOISE_TAGS: [&str; 4] = ["style", "script", "sup", "noscript"];

/// Tag whose elements are collected as the side list before cleaning.
pub const SECTION_TAG: &str = "section";

/// Container tag checked against the hidden-container attribute pattern.
pub const HIDDEN_CONTAINER_TAG: &str = "div";

// === Region pruning ===

/// Paragraph-like elements subject to the anchor-density rule.
pub static ANCHOR_DENSITY_TAGS: [&str; 2] = ["p", "li"];

/// Emphasis tags unwrapped across the whole document.
pub static EMPHASIS_TAGS: [&str; 2] = ["strong", "b"];

/// Anchor tag.
pub const ANCHOR_TAG: &str = "a";

/// Token text used for anchors that wrap an image.
pub const IMAGE_LINK_TEXT: &str = "IMAGE";

// === Linearization ===

/// Image source attributes in priority order; the first non-empty one wins.
pub static IMAGE_SOURCE_ATTRIBUTES: [&str; 6] =
    ["original", "file", "data-original", "src-info", "data-src", "src"];

/// Region children kept verbatim as markup blocks.
pub static VERBATIM_TAGS: [&str; 2] = ["table", "aside"];

/// `VERBATIM_TAGS` as a `HashSet`
pub static VERBATIM_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VERBATIM_TAGS.into_iter().collect());

/// Parent tag whose text fragments are always kept.
pub const LIST_ITEM_TAG: &str = "li";

/// Table cell tag.
pub const CELL_TAG: &str = "td";

// === Title selection ===

/// Heading tags that provide title candidates.
pub static TITLE_HEADING_TAGS: [&str; 3] = ["h1", "h2", "h3"];

/// `TITLE_HEADING_TAGS` as a `HashSet`
pub static TITLE_HEADING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TITLE_HEADING_TAGS.into_iter().collect());

/// Check if a region child is kept verbatim
#[inline]
#[must_use]
pub fn is_verbatim_tag(tag: &str) -> bool {
    VERBATIM_TAG_SET.contains(tag)
}

/// Check if a tag is a title heading
#[inline]
#[must_use]
pub fn is_title_heading(tag: &str) -> bool {
    TITLE_HEADING_TAG_SET.contains(tag)
}

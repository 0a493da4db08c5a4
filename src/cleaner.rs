//! Tag Cleaning
//!
//! Markup-to-markup rewriting that runs before the page tree used for
//! extraction is built. The [`TagCleaner`] trait is the seam; the default
//! [`DomTagCleaner`] parses with `dom_query`, edits the tree and serializes
//! it back.

use regex::Regex;
use tracing::debug;

use crate::dom::{self, Document, Selection};
use crate::error::Result;
use crate::extractor::tags::{HIDDEN_CONTAINER_TAG, NOISE_TAGS, SECTION_TAG};
use crate::patterns::{FORMATTING_TAG_PATTERN, HIDDEN_CONTAINER_PATTERN};

/// Tag-level rewriting of raw markup.
///
/// Patterns are regular expressions; attribute patterns match
/// case-insensitively anywhere in an attribute value, tag-name patterns
/// must match the whole tag name.
pub trait TagCleaner: Send + Sync {
    /// Remove every `tag` element together with its subtree.
    fn strip_tag(&self, markup: &str, tag: &str) -> String;

    /// Remove every `tag` element carrying an attribute value that matches `pattern`.
    fn strip_by_attribute_pattern(&self, markup: &str, tag: &str, pattern: &str) -> Result<String>;

    /// Unwrap every element whose tag name matches `pattern`, keeping its content.
    fn unwrap_tags_matching(&self, markup: &str, pattern: &str) -> Result<String>;

    /// Serialized copies of the outermost `tag` elements, in document order.
    fn extract_sections(&self, markup: &str, tag: &str) -> Vec<String>;
}

/// [`TagCleaner`] backed by `dom_query`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomTagCleaner;

impl DomTagCleaner {
    fn rewrite(markup: &str, edit: impl FnOnce(&Document)) -> String {
        let doc = dom::parse(markup);
        edit(&doc);
        doc.html().to_string()
    }
}

impl TagCleaner for DomTagCleaner {
    fn strip_tag(&self, markup: &str, tag: &str) -> String {
        Self::rewrite(markup, |doc| doc.select(tag).remove())
    }

    fn strip_by_attribute_pattern(&self, markup: &str, tag: &str, pattern: &str) -> Result<String> {
        let re = Regex::new(&format!("(?i){pattern}"))?;
        Ok(Self::rewrite(markup, |doc| {
            // Snapshot first: removing a matched ancestor must not disturb the walk.
            let matched: Vec<_> = doc
                .select(tag)
                .nodes()
                .iter()
                .copied()
                .filter(|node| {
                    dom::get_all_attributes(&Selection::from(*node))
                        .iter()
                        .any(|(_, value)| re.is_match(value))
                })
                .collect();
            for node in matched {
                node.remove_from_parent();
            }
        }))
    }

    fn unwrap_tags_matching(&self, markup: &str, pattern: &str) -> Result<String> {
        let re = Regex::new(&format!("^(?i:{pattern})$"))?;
        Ok(Self::rewrite(markup, |doc| {
            let mut names: Vec<String> = doc
                .select("body *")
                .nodes()
                .iter()
                .filter_map(dom::node_tag)
                .filter(|name| re.is_match(name))
                .collect();
            names.sort_unstable();
            names.dedup();
            if !names.is_empty() {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                dom::strip_tags(&doc.select("body"), &names);
            }
        }))
    }

    fn extract_sections(&self, markup: &str, tag: &str) -> Vec<String> {
        let doc = dom::parse(markup);
        doc.select(tag)
            .nodes()
            .iter()
            .filter(|node| {
                !node
                    .ancestors(None)
                    .iter()
                    .any(|anc| dom::node_tag(anc).as_deref() == Some(tag))
            })
            .map(|node| dom::outer_html(&Selection::from(*node)).to_string())
            .collect()
    }
}

/// Markup ready for tree building plus the side list collected on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedPage {
    /// Cleaned markup.
    pub markup: String,

    /// Serialized side-list sections, no longer present in `markup`.
    pub sections: Vec<String>,
}

/// Run the pre-cleaning policy over raw markup.
///
/// Noise tags go first, then the side list is taken out of the page, then
/// hidden or auxiliary containers are dropped and pure formatting tags
/// unwrapped.
pub fn pre_clean(markup: &str, cleaner: &dyn TagCleaner) -> Result<CleanedPage> {
    let mut page = markup.to_string();
    for tag in NOISE_TAGS {
        page = cleaner.strip_tag(&page, tag);
    }

    let sections = cleaner.extract_sections(&page, SECTION_TAG);
    if !sections.is_empty() {
        page = cleaner.strip_tag(&page, SECTION_TAG);
    }

    page = cleaner.strip_by_attribute_pattern(&page, HIDDEN_CONTAINER_TAG, HIDDEN_CONTAINER_PATTERN)?;
    page = cleaner.unwrap_tags_matching(&page, FORMATTING_TAG_PATTERN)?;

    debug!(sections = sections.len(), bytes = page.len(), "pre-cleaned page");
    Ok(CleanedPage {
        markup: page,
        sections,
    })
}

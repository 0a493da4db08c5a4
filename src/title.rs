//! Title Selection
//!
//! Compares the page's declared `<title>` against heading candidates and
//! returns the most plausible article headline.

use crate::dom::{self, Document, Selection};
use crate::extractor::tags::is_title_heading;
use crate::patterns::TITLE_SEPARATOR;

/// Declared page title, cut at the first `_` or `-` separator and trimmed.
#[must_use]
pub fn declared_title(doc: &Document) -> String {
    let full = dom::text_content(&doc.select("head > title"));
    TITLE_SEPARATOR
        .split(&full)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Trimmed text nodes of `h1`-`h3` headings and of paragraphs whose class is
/// exactly `title_class`, in document order. Blank nodes are skipped.
#[must_use]
pub fn heading_candidates(doc: &Document, title_class: &str) -> Vec<String> {
    let Some(root) = doc.select("html").nodes().first().copied() else {
        return Vec::new();
    };

    root.descendants()
        .iter()
        .filter(|node| {
            let Some(tag) = dom::node_tag(node) else {
                return false;
            };
            is_title_heading(&tag)
                || (tag == "p"
                    && dom::get_attribute(&Selection::from(**node), "class").as_deref()
                        == Some(title_class))
        })
        .flat_map(|node| dom::direct_text_nodes(node))
        .map(|text| text.text().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Choose the article title.
///
/// A heading that is a prefix or suffix of the declared title wins outright.
/// Otherwise the shortest non-empty candidate is returned, ties broken by
/// string order. Returns an empty string when there are no candidates.
#[must_use]
pub fn select_title(declared: &str, candidates: &[String]) -> String {
    if let Some(hit) = candidates
        .iter()
        .find(|c| declared.starts_with(c.as_str()) || declared.ends_with(c.as_str()))
    {
        return hit.clone();
    }

    std::iter::once(declared)
        .chain(candidates.iter().map(String::as_str))
        .filter(|c| !c.is_empty())
        .min_by(|a, b| {
            dom::char_len(a)
                .cmp(&dom::char_len(b))
                .then_with(|| a.cmp(b))
        })
        .unwrap_or_default()
        .to_string()
}

/// Extract the article title from a parsed page.
#[must_use]
pub fn extract_title(doc: &Document, title_class: &str) -> String {
    let declared = declared_title(doc);
    let candidates = heading_candidates(doc, title_class);
    select_title(&declared, &candidates)
}

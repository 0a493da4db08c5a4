//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. Every stage of the pipeline reads
//! and mutates the tree through these functions so that node-level details
//! (text nodes, parent tags, splicing) live in one place.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_RUN;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of the first node in a selection
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag)
}

/// Get tag name (lowercase) of a single node; `None` for text and comments
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Tag name of a node's parent element, or empty string at the root
#[must_use]
pub fn parent_tag(node: &NodeRef) -> String {
    node.parent()
        .as_ref()
        .and_then(node_tag)
        .unwrap_or_default()
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Text node children of a node, in order
#[must_use]
pub fn direct_text_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_text).collect()
}

/// Number of characters in a string
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Number of non-whitespace characters in a string
#[must_use]
pub fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Collapse whitespace runs to single spaces and trim
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Escape text so it parses back as a single text node
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

// === Tree Navigation ===

/// Whether `node` is still connected under the node `root`
///
/// Handles taken before a mutation stay valid in the arena even when their
/// subtree was detached, so callers walking a snapshot check this first.
#[must_use]
pub fn is_within(node: &NodeRef, root: NodeId) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.id == root {
            return true;
        }
        current = n.parent();
    }
    false
}

// === Tree Manipulation ===

/// Remove elements but keep their children (unwrap)
#[inline]
pub fn strip_tags(sel: &Selection, tags: &[&str]) {
    sel.strip_elements(tags);
}

/// Append HTML content
#[inline]
pub fn append_html(sel: &Selection, html: &str) {
    sel.append_html(html);
}

/// Replace element with HTML
#[inline]
pub fn replace_with_html(sel: &Selection, html: &str) {
    sel.replace_with_html(html);
}

/// Merge runs of adjacent text nodes under `root` into single text nodes.
///
/// Unwrapping an element or splicing in a link token leaves its text as a
/// separate sibling; downstream stages treat one run of text as one fragment.
pub fn merge_text_runs(root: &NodeRef) {
    let mut parents = vec![*root];
    parents.extend(root.descendants().into_iter().filter(NodeRef::is_element));

    for parent in parents {
        let mut run: Vec<NodeRef> = Vec::new();
        for child in parent.children() {
            if child.is_text() {
                run.push(child);
            } else {
                flush_text_run(&mut run);
            }
        }
        flush_text_run(&mut run);
    }
}

fn flush_text_run(run: &mut Vec<NodeRef>) {
    if let [first, rest @ ..] = run.as_slice() {
        if !rest.is_empty() {
            let merged: String = run.iter().map(|n| n.text().to_string()).collect();
            for node in rest {
                node.remove_from_parent();
            }
            replace_with_html(&Selection::from(*first), &escape_text(&merged));
        }
    }
    run.clear();
}

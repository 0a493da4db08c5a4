//! Content linearization.
//!
//! Walks the pruned region once in document order and turns its text nodes,
//! images and direct `table`/`aside` children into [`ContentBlock`]s. Short
//! text fragments are dropped unless their parent is the winner tag (the tag
//! holding the most text) or a list item.

use std::collections::HashSet;

use tracing::debug;
use url::Url;

use super::histogram::TagHistogram;
use super::links::image_source;
use super::tags::{is_verbatim_tag, ANCHOR_TAG, CELL_TAG, LIST_ITEM_TAG};
use crate::dom::{self, NodeId, NodeRef, Selection};
use crate::result::ContentBlock;

/// A node picked up by the walk, with what was known about it at snapshot time.
enum Item<'a> {
    Text { node: NodeRef<'a>, parent: String },
    Image(NodeRef<'a>),
    Verbatim { node: NodeRef<'a>, tag: String },
}

/// Snapshot of the nodes to visit: the region itself when it is a table or
/// aside, then every text node and image plus the region's direct table and
/// aside children.
fn collect_items<'a>(root: NodeRef<'a>) -> Vec<Item<'a>> {
    let mut items = Vec::new();
    if let Some(tag) = dom::node_tag(&root).filter(|tag| is_verbatim_tag(tag)) {
        items.push(Item::Verbatim { node: root, tag });
    }

    for node in root.descendants() {
        if node.is_text() {
            let parent = dom::parent_tag(&node);
            items.push(Item::Text { node, parent });
            continue;
        }
        let Some(tag) = dom::node_tag(&node) else {
            continue;
        };
        if tag == "img" {
            items.push(Item::Image(node));
        } else if is_verbatim_tag(&tag) && node.parent().is_some_and(|p| p.id == root.id) {
            items.push(Item::Verbatim { node, tag });
        }
    }
    items
}

fn build_histogram(items: &[Item]) -> TagHistogram {
    let mut histogram = TagHistogram::new();
    for item in items {
        if let Item::Text { node, parent } = item {
            histogram.record(parent, dom::char_len(node.text().trim()));
        }
    }
    histogram
}

/// Serialize a verbatim element after unwrapping its anchors.
fn verbatim_html(element: &Selection) -> ContentBlock {
    dom::strip_tags(element, &[ANCHOR_TAG]);
    ContentBlock::Html(dom::outer_html(element).to_string())
}

/// One text block per non-blank cell text node of a table; the nodes are
/// marked consumed so the text rule does not emit them again.
fn cell_texts(table: &Selection, consumed: &mut HashSet<NodeId>, blocks: &mut Vec<ContentBlock>) {
    for cell in table.select(CELL_TAG).nodes() {
        for text_node in dom::direct_text_nodes(cell) {
            let text = text_node.text();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            consumed.insert(text_node.id);
            blocks.push(ContentBlock::Text(trimmed.to_string()));
        }
    }
}

/// Linearize a region into content blocks.
///
/// Text nodes whose whitespace-free length is below `impurity_threshold` are
/// dropped unless their parent is the winner tag or `li`. Image sources and
/// link targets are resolved against `base`.
#[must_use]
pub fn linearize(region: &Selection, impurity_threshold: usize, base: Option<&Url>) -> Vec<ContentBlock> {
    let Some(root) = region.nodes().first().copied() else {
        return Vec::new();
    };

    let items = collect_items(root);
    let histogram = build_histogram(&items);
    let winner = histogram.winner();
    debug!(winner = ?winner, items = items.len(), "linearizing region");

    let mut blocks = Vec::new();
    let mut consumed: HashSet<NodeId> = HashSet::new();

    for item in &items {
        match item {
            Item::Text { node, parent } => {
                if consumed.contains(&node.id) {
                    continue;
                }
                let text = node.text();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if winner != Some(parent.as_str())
                    && dom::non_whitespace_len(trimmed) < impurity_threshold
                    && parent != LIST_ITEM_TAG
                {
                    continue;
                }
                blocks.push(ContentBlock::Text(trimmed.to_string()));
            }
            Item::Image(node) => match image_source(node, base) {
                Some(src) => blocks.push(ContentBlock::Image { src }),
                None => debug!("skipping image without a source attribute"),
            },
            Item::Verbatim { node, tag } => {
                let element = Selection::from(*node);
                let is_region = node.id == root.id;
                if tag == "table" {
                    if winner == Some(CELL_TAG) || element.select("p").exists() {
                        continue;
                    }
                    if is_region {
                        cell_texts(&element, &mut consumed, &mut blocks);
                    } else {
                        blocks.push(verbatim_html(&element));
                    }
                } else if !is_region {
                    blocks.push(verbatim_html(&element));
                }
            }
        }
    }

    debug!(blocks = blocks.len(), "region linearized");
    blocks
}

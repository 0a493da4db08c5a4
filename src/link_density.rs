//! Anchor Density Pruning
//!
//! Paragraphs and list items dominated by link text are navigation or
//! boilerplate, not prose. Their anchors are unwrapped so the words stay but
//! no link token is produced for them.

use dom_query::Selection;
use tracing::debug;

use crate::dom;
use crate::extractor::tags::{ANCHOR_DENSITY_TAGS, ANCHOR_TAG};

/// Link text versus total text of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorDensity {
    /// Characters of the anchor texts joined with single spaces.
    pub anchor_len: usize,
    /// Characters of the descendant text nodes joined with single spaces.
    pub text_len: usize,
}

/// Length of `parts` joined by one-character separators.
fn joined_len(parts: impl IntoIterator<Item = usize>) -> usize {
    let (count, total) = parts
        .into_iter()
        .fold((0usize, 0usize), |(count, total), len| (count + 1, total + len));
    total + count.saturating_sub(1)
}

impl AnchorDensity {
    /// Measure an element.
    #[must_use]
    pub fn measure(element: &Selection) -> Self {
        let anchors = element.select(ANCHOR_TAG);
        let anchor_len = joined_len(anchors.nodes().iter().map(|a| dom::char_len(&a.text())));
        let text_len = joined_len(
            element
                .nodes()
                .iter()
                .flat_map(|node| node.descendants())
                .filter(|node| node.is_text())
                .map(|node| dom::char_len(&node.text())),
        );
        Self { anchor_len, text_len }
    }

    /// `anchor_len / (text_len + 1)`; the `+ 1` keeps empty blocks finite.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.anchor_len as f64 / (self.text_len as f64 + 1.0)
    }

    /// Whether the ratio is strictly above `limit`.
    #[must_use]
    pub fn exceeds(&self, limit: f64) -> bool {
        self.ratio() > limit
    }
}

/// Unwrap the anchors of every paragraph or list item under `region` whose
/// anchor ratio exceeds `limit`.
///
/// Returns the number of blocks whose anchors were unwrapped.
pub fn prune_anchor_dense_blocks(region: &Selection, limit: f64) -> usize {
    // Snapshot: unwrapping changes the subtree the selection was built from.
    let blocks: Vec<_> = region
        .select(&ANCHOR_DENSITY_TAGS.join(", "))
        .nodes()
        .to_vec();

    let mut pruned = 0;
    for node in blocks {
        let block = Selection::from(node);
        let density = AnchorDensity::measure(&block);
        if density.anchor_len == 0 || !density.exceeds(limit) {
            continue;
        }
        dom::strip_tags(&block, &[ANCHOR_TAG]);
        pruned += 1;
    }

    if pruned > 0 {
        debug!(pruned, limit, "unwrapped anchors in link-dense blocks");
    }
    pruned
}

//! Link and image normalization.
//!
//! Anchors become inline `[text](url)` tokens, emphasis is unwrapped and an
//! image's effective source is picked from an ordered attribute list.

use tracing::{debug, trace};
use url::Url;

use crate::dom::{self, Document, NodeRef, Selection};
use crate::extractor::tags::{ANCHOR_TAG, EMPHASIS_TAGS, IMAGE_LINK_TEXT, IMAGE_SOURCE_ATTRIBUTES};
use crate::url_utils::{resolve_url, ArchiveUnwrapper};

/// Inline link token for an anchor.
#[must_use]
pub fn link_token(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

/// Replace every anchor with a non-empty `href` under `region` by its link
/// token. The href is resolved against `base` and stripped of any archive
/// wrapper first.
///
/// Returns the number of anchors replaced.
pub fn normalize_links(region: &Selection, base: Option<&Url>, archive: &ArchiveUnwrapper) -> usize {
    let Some(root) = region.nodes().first().copied() else {
        return 0;
    };
    let anchors: Vec<NodeRef> = region.select(ANCHOR_TAG).nodes().to_vec();

    let mut replaced = 0;
    for node in anchors {
        // A nested anchor goes away with its replaced ancestor.
        if !dom::is_within(&node, root.id) {
            continue;
        }
        let anchor = Selection::from(node);
        let Some(href) = dom::get_attribute(&anchor, "href") else {
            continue;
        };
        if href.trim().is_empty() {
            continue;
        }

        let resolved = resolve_url(&href, base);
        let target = archive.unwrap_url(&resolved);
        let text = if anchor.select("img").exists() {
            IMAGE_LINK_TEXT.to_string()
        } else {
            anchor.text().trim().to_string()
        };

        trace!(href = %href, target = %target, "rewriting anchor");
        dom::replace_with_html(&anchor, &dom::escape_text(&link_token(&text, &target)));
        replaced += 1;
    }

    if replaced > 0 {
        debug!(replaced, "anchors rewritten as link tokens");
    }
    replaced
}

/// Unwrap every `strong` and `b` element in the document, keeping their text.
pub fn unwrap_emphasis(doc: &Document) {
    dom::strip_tags(&doc.select("html"), &EMPHASIS_TAGS);
}

/// Effective source of an image element: the first non-blank attribute from
/// the priority list, resolved against `base`.
#[must_use]
pub fn image_source(image: &NodeRef, base: Option<&Url>) -> Option<String> {
    let image = Selection::from(*image);
    IMAGE_SOURCE_ATTRIBUTES
        .iter()
        .filter_map(|name| dom::get_attribute(&image, name))
        .find(|value| !value.trim().is_empty())
        .map(|value| resolve_url(&value, base))
}

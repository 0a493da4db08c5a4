//! Region Location
//!
//! Finds the single element holding the page's main content. Semantic
//! containers are trusted first; otherwise block candidates are scored by
//! text density, paragraph structure and link penalty.

use tracing::debug;

use crate::dom::{self, Document, NodeRef, Selection};

/// Finds the main content element of a parsed page.
pub trait RegionLocator: Send + Sync {
    /// The main content element, or `None` when the page has none.
    fn locate<'a>(&self, doc: &'a Document) -> Option<Selection<'a>>;
}

/// Semantic containers, in priority order.
const SEMANTIC_SELECTORS: [&str; 3] = [
    r#"[itemprop="articleBody"]"#,
    "article",
    r#"main, [role="main"]"#,
];

/// Block elements scored as region candidates.
const CANDIDATE_SELECTOR: &str = "div, section, article, main, td, table";

/// Paragraphs at least this long (non-whitespace chars) count as substantive.
const SUBSTANTIVE_PARAGRAPH_LEN: usize = 80;

/// Text beyond this length adds nothing to a candidate's score.
const MAX_SCORED_TEXT_LEN: i64 = 8000;

/// Default [`RegionLocator`]: semantic containers, then density scoring.
#[derive(Debug, Clone, Copy)]
pub struct DensityLocator {
    /// Share of body text the best candidate must hold; below it the body
    /// itself is the region.
    pub min_coverage: f64,
}

impl Default for DensityLocator {
    fn default() -> Self {
        Self { min_coverage: 0.3 }
    }
}

impl RegionLocator for DensityLocator {
    fn locate<'a>(&self, doc: &'a Document) -> Option<Selection<'a>> {
        let body = doc.select("body");
        let body_node = *body.nodes().first()?;
        let body_len = dom::non_whitespace_len(&dom::text_content(&body));
        if body_len == 0 {
            debug!("page body carries no text");
            return None;
        }

        for selector in SEMANTIC_SELECTORS {
            let hit = doc
                .select(selector)
                .nodes()
                .iter()
                .copied()
                .find(|node| dom::non_whitespace_len(&node.text()) > 0);
            if let Some(node) = hit {
                debug!(selector, "region found by semantic container");
                return Some(Selection::from(node));
            }
        }

        let mut best: Option<(i64, NodeRef<'a>)> = None;
        for node in body.select(CANDIDATE_SELECTOR).nodes() {
            let score = score_candidate(&Selection::from(*node));
            if score > best.map_or(0, |(s, _)| s) {
                best = Some((score, *node));
            }
        }

        if let Some((score, node)) = best {
            let coverage = dom::non_whitespace_len(&node.text()) as f64 / body_len as f64;
            if coverage >= self.min_coverage {
                debug!(score, coverage, tag = ?dom::node_tag(&node), "region found by density");
                return Some(Selection::from(node));
            }
            debug!(score, coverage, "best candidate covers too little of the body");
        }

        Some(Selection::from(body_node))
    }
}

fn count_as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Score a candidate from text length, paragraph structure and sentence
/// count, penalized per anchor and halved when links dominate.
#[must_use]
pub fn score_candidate(el: &Selection) -> i64 {
    let text = dom::text_content(el);
    let text_len = count_as_i64(dom::non_whitespace_len(&text));
    if text_len == 0 {
        return 0;
    }

    let paragraphs = el.select("p");
    let p_count = count_as_i64(paragraphs.length());
    let substantive = count_as_i64(
        paragraphs
            .nodes()
            .iter()
            .filter(|p| dom::non_whitespace_len(&p.text()) >= SUBSTANTIVE_PARAGRAPH_LEN)
            .count(),
    );

    let anchors = el.select("a");
    let a_count = count_as_i64(anchors.length());
    let link_len = count_as_i64(dom::non_whitespace_len(&dom::text_content(&anchors)));

    let effective_len = text_len.min(MAX_SCORED_TEXT_LEN);
    let sentences = count_sentences(&text).min(effective_len / 50);

    let mut score = effective_len;
    score = score.saturating_add(p_count.saturating_mul(200));
    score = score.saturating_add(substantive.saturating_mul(300));
    score = score.saturating_add(sentences.saturating_mul(50));
    score = score.saturating_sub(a_count.saturating_mul(50));

    if link_len.saturating_mul(2) > text_len {
        score /= 2;
    }
    score
}

fn count_sentences(text: &str) -> i64 {
    let mut count: i64 = 0;
    let mut prev_term = false;

    for ch in text.chars() {
        let is_term = matches!(ch, '.' | '!' | '?');
        if is_term && !prev_term {
            count = count.saturating_add(1);
        }
        prev_term = is_term;
    }
    count
}

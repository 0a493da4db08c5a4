//! Tag histogram used to pick the winner tag.

use std::collections::HashMap;

/// Accumulated trimmed text length per parent tag name.
#[derive(Debug, Default, Clone)]
pub struct TagHistogram {
    lengths: HashMap<String, usize>,
}

impl TagHistogram {
    /// Empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute `len` characters to `tag`.
    pub fn record(&mut self, tag: &str, len: usize) {
        *self.lengths.entry(tag.to_string()).or_insert(0) += len;
    }

    /// Tag with the largest accumulated length; on a tie the greatest tag name
    /// wins. `None` when nothing was recorded.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.lengths
            .iter()
            .max_by(|(tag_a, len_a), (tag_b, len_b)| len_a.cmp(len_b).then_with(|| tag_a.cmp(tag_b)))
            .map(|(tag, _)| tag.as_str())
    }
}

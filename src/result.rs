//! Result types for extraction output.
//!
//! An extraction yields a title and an ordered sequence of content blocks.
//! Both serialize directly to one JSON object per page.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One unit of extracted content.
///
/// Serializes as `{"type": "text" | "image" | "html", "data": ...}`; image
/// data is an object holding the resolved `src`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A trimmed text fragment. Link tokens appear inline as `[text](url)`.
    Text(String),

    /// An image, with its source resolved against the base URL.
    Image {
        /// Effective image source.
        src: String,
    },

    /// A markup fragment kept verbatim (tables and asides), anchors removed.
    Html(String),
}

impl ContentBlock {
    /// Name of the block type as it appears in serialized output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image { .. } => "image",
            Self::Html(_) => "html",
        }
    }

    /// Text payload for text blocks.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Result of extracting one HTML document.
///
/// When no main region is found both fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Selected article title, possibly empty.
    pub title: String,

    /// Content blocks in document order.
    pub content: Vec<ContentBlock>,
}

impl ExtractResult {
    /// True for the degenerate "no region" result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// Iterate over the text payloads, skipping images and markup.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.content.iter().filter_map(ContentBlock::as_text)
    }

    /// Serialize to a single JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::ExtractionError(e.to_string()))
    }
}

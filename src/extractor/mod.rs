//! Region content extraction.
//!
//! # Module Structure
//!
//! - `tags`: Tag constants shared by cleaning, pruning and linearization
//! - `histogram`: Per-tag text length accounting for the winner tag
//! - `links`: Link token rewriting, emphasis unwrapping, image sources
//! - `linearize`: Region walk that emits content blocks

pub mod histogram;
pub mod linearize;
pub mod links;
pub mod tags;

pub use histogram::TagHistogram;
pub use linearize::linearize;
pub use links::{image_source, normalize_links, unwrap_emphasis};

//! # rs-jparser
//!
//! Readable article extraction for HTML pages.
//!
//! Given a full web page, the extractor finds the main content region,
//! strips navigation and markup noise, and linearizes what remains into a
//! title plus an ordered list of text, image and markup blocks.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_jparser::{extract, ContentBlock};
//!
//! let html = r#"<html><head><title>Cats Are Great - PetSite</title></head>
//! <body><article><h1>Cats Are Great</h1>
//! <p>Cats sleep for most of the day and spend the rest of it judging you.</p>
//! </article></body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.title, "Cats Are Great");
//! assert!(result.content.contains(&ContentBlock::Text(
//!     "Cats sleep for most of the day and spend the rest of it judging you.".to_string()
//! )));
//! println!("{}", result.to_json()?);
//! # Ok::<(), rs_jparser::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Pre-cleaning**: noise tags removed, hidden containers dropped,
//!   formatting tags unwrapped, `section` side lists moved out of the page
//! - **Region location**: semantic containers first, then density scoring
//! - **Pruning**: link-dense paragraphs lose their anchors, remaining anchors
//!   become `[text](url)` tokens, emphasis is unwrapped
//! - **Linearization**: winner-tag filtering of short fragments, image source
//!   priority, verbatim tables and asides

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Region content extraction (tag constants, links, linearization).
pub mod extractor;

/// URL utilities for validation, resolution, and archive unwrapping.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Anchor density pruning.
pub mod link_density;

/// Markup pre-cleaning and the tag cleaner seam.
pub mod cleaner;

/// Main content region location.
pub mod region;

/// Article title selection.
pub mod title;

// Public API - re-exports
pub use cleaner::{DomTagCleaner, TagCleaner};
pub use error::{Error, Result};
pub use extract::Extractor;
pub use options::Options;
pub use region::{DensityLocator, RegionLocator};
pub use result::{ContentBlock, ExtractResult};

/// Extracts the article from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_jparser::extract;
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let result = extract(html)?;
/// assert_eq!(result.texts().collect::<Vec<_>>(), vec!["Content"]);
/// # Ok::<(), rs_jparser::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the article from an HTML document with custom options.
///
/// Builds a one-off [`Extractor`]; reuse an `Extractor` directly when
/// processing many pages with the same options.
///
/// # Example
///
/// ```rust
/// use rs_jparser::{extract_with_options, Options};
///
/// let html = r#"<html><body><article>
/// <p>See <a href="/about">about</a> for the story of how the company started.</p>
/// </article></body></html>"#;
/// let options = Options {
///     url: Some("https://example.com/".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(
///     result.texts().next(),
///     Some("See [about](https://example.com/about) for the story of how the company started.")
/// );
/// # Ok::<(), rs_jparser::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    Extractor::new(options.clone())?.extract(html)
}

/// Extracts the article from HTML bytes with automatic encoding detection.
///
/// The encoding comes from a byte order mark, a `<meta charset>` or a
/// `http-equiv` content type declaration, defaulting to UTF-8. Invalid
/// sequences become U+FFFD rather than errors.
///
/// # Example
///
/// ```rust
/// use rs_jparser::extract_bytes;
///
/// // ISO-8859-1 encoded HTML with charset declaration
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article><p>Caf\xE9</p></article></body></html>";
/// let result = extract_bytes(html)?;
/// assert_eq!(result.texts().next(), Some("Caf\u{e9}"));
/// # Ok::<(), rs_jparser::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the article from HTML bytes with custom options and automatic
/// encoding detection.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

//! Extraction orchestration.
//!
//! [`Extractor`] sequences pre-cleaning, title selection, region location,
//! region pruning and linearization into one [`ExtractResult`]. Its
//! configuration is fixed at construction: the base URL is validated and the
//! archive pattern compiled once per instance.

use std::fmt;

use tracing::debug;
use url::Url;

use crate::cleaner::{pre_clean, DomTagCleaner, TagCleaner};
use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::extractor::{linearize, links};
use crate::link_density::prune_anchor_dense_blocks;
use crate::options::Options;
use crate::region::{DensityLocator, RegionLocator};
use crate::result::ExtractResult;
use crate::title::extract_title;
use crate::url_utils::{parse_base_url, ArchiveUnwrapper};

/// Reusable article extractor.
///
/// Each call to [`Extractor::extract`] parses its own document tree, so one
/// extractor can serve many pages, including from several threads.
///
/// # Example
///
/// ```rust
/// use rs_jparser::{ContentBlock, Extractor, Options};
///
/// let extractor = Extractor::new(Options {
///     url: Some("https://example.com/news/".to_string()),
///     ..Options::default()
/// })?;
///
/// let html = r#"<html><body><article>
///     <p>Story text that is easily long enough to count as content.</p>
///     <img src="photo.jpg">
/// </article></body></html>"#;
/// let result = extractor.extract(html)?;
/// assert!(result
///     .content
///     .contains(&ContentBlock::Image { src: "https://example.com/news/photo.jpg".to_string() }));
/// # Ok::<(), rs_jparser::Error>(())
/// ```
pub struct Extractor {
    options: Options,
    base: Option<Url>,
    archive: ArchiveUnwrapper,
    cleaner: Box<dyn TagCleaner>,
    locator: Box<dyn RegionLocator>,
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("options", &self.options)
            .field("base", &self.base.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}

impl Extractor {
    /// Extractor with the default tag cleaner and region locator.
    pub fn new(options: Options) -> Result<Self> {
        Self::with_collaborators(options, Box::new(DomTagCleaner), Box::new(DensityLocator::default()))
    }

    /// Extractor with caller-supplied collaborators.
    pub fn with_collaborators(
        options: Options,
        cleaner: Box<dyn TagCleaner>,
        locator: Box<dyn RegionLocator>,
    ) -> Result<Self> {
        let base = options.base_url().map(parse_base_url).transpose()?;
        let archive = ArchiveUnwrapper::new(&options.archive_pattern)?;
        Ok(Self {
            options,
            base,
            archive,
            cleaner,
            locator,
        })
    }

    /// Extract the title and content blocks of one page.
    ///
    /// A page without a main region yields the empty result; only markup
    /// with nothing to parse is an error.
    pub fn extract(&self, html: &str) -> Result<ExtractResult> {
        if html.trim().is_empty() {
            return Err(Error::ParseError("input markup is empty".to_string()));
        }

        let page = pre_clean(html, self.cleaner.as_ref())?;
        let doc = dom::parse(&page.markup);
        let title = extract_title(&doc, &self.options.title_class);

        let Some(region) = self.locator.locate(&doc) else {
            debug!("no main region found");
            return Ok(ExtractResult::default());
        };
        let Some(root) = region.nodes().first().copied() else {
            debug!("region locator returned an empty selection");
            return Ok(ExtractResult::default());
        };
        debug!(tag = ?dom::node_tag(&root), "main region located");

        reattach_sections(&region, &page.sections);
        prune_anchor_dense_blocks(&region, self.options.anchor_ratio_limit);
        links::normalize_links(&region, self.base.as_ref(), &self.archive);
        links::unwrap_emphasis(&doc);
        dom::merge_text_runs(&root);

        let content = linearize(&region, self.options.impurity_threshold, self.base.as_ref());
        debug!(title_len = title.len(), blocks = content.len(), "extraction finished");
        Ok(ExtractResult { title, content })
    }
}

/// Append every side-list section to the end of the region.
fn reattach_sections(region: &Selection, sections: &[String]) -> usize {
    for section in sections {
        dom::append_html(region, section);
    }
    if !sections.is_empty() {
        debug!(attached = sections.len(), "side-list sections re-attached to region");
    }
    sections.len()
}

//! Symbol extraction from API documentation index pages.
//!
//! Index pages differ between documentation generator versions. Each known
//! markup dialect is an [`ElementMatcher`]; the [`MarkupExtractor`] runs all
//! of them over a document and concatenates what they find. A page may match
//! several dialects at once.
//!
//! Adding support for a new generator means adding one matcher to
//! [`MarkupExtractor::new`].

pub mod dialects;

use scraper::{Html, Selector};
use std::path::Path;

use crate::config::ExtractionConfig;
use crate::error::{IndexError, IndexResult};

pub use dialects::{LegacyMemberNameLink, MemberNameLink, TypeTitleLink};

/// A link as it appears in the page, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    /// Inner HTML of the anchor
    pub label: String,
    /// Value of the `href` attribute, empty if absent
    pub href: String,
}

/// One markup dialect.
pub trait ElementMatcher {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Append every link this dialect recognizes in `document`.
    ///
    /// `file` is only used to describe malformed markup.
    fn collect(&self, document: &Html, file: &Path, links: &mut Vec<RawLink>) -> IndexResult<()>;
}

/// Runs every known dialect over a document.
pub struct MarkupExtractor {
    matchers: Vec<Box<dyn ElementMatcher>>,
}

impl MarkupExtractor {
    pub fn new(config: &ExtractionConfig) -> IndexResult<Self> {
        let matchers: Vec<Box<dyn ElementMatcher>> = vec![
            Box::new(LegacyMemberNameLink::new()?),
            Box::new(MemberNameLink::new()?),
            Box::new(TypeTitleLink::new(config.title_prefixes.clone())?),
        ];
        Ok(Self { matchers })
    }

    /// Build an extractor from an explicit list of matchers.
    pub fn with_matchers(matchers: Vec<Box<dyn ElementMatcher>>) -> Self {
        Self { matchers }
    }

    /// Collect links from all dialects, in dialect order.
    pub fn extract(&self, document: &Html, file: &Path) -> IndexResult<Vec<RawLink>> {
        let mut links = Vec::new();
        for matcher in &self.matchers {
            let before = links.len();
            matcher.collect(document, file, &mut links)?;
            tracing::trace!(
                "{}: {} link(s) in {}",
                matcher.name(),
                links.len() - before,
                file.display()
            );
        }
        Ok(links)
    }

    #[cfg(test)]
    fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }
}

/// Parse a CSS selector, mapping failure to [`IndexError::Selector`].
pub(crate) fn selector(css: &str) -> IndexResult<Selector> {
    Selector::parse(css).map_err(|e| IndexError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

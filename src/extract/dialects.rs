//! Known index-page markup dialects.

use scraper::{ElementRef, Html, Selector};
use std::path::Path;

use super::{ElementMatcher, RawLink, selector};
use crate::error::{IndexError, IndexResult};

fn raw_link(anchor: ElementRef<'_>) -> RawLink {
    RawLink {
        label: anchor.inner_html(),
        href: anchor.value().attr("href").unwrap_or_default().to_string(),
    }
}

/// Older generators wrap the anchor in `<span class="memberNameLink">`.
///
/// A span without an anchor means the page is not what we think it is, and
/// the whole run fails.
pub struct LegacyMemberNameLink {
    span: Selector,
    anchor: Selector,
}

impl LegacyMemberNameLink {
    pub fn new() -> IndexResult<Self> {
        Ok(Self {
            span: selector(r#"span[class="memberNameLink"]"#)?,
            anchor: selector("a[href]")?,
        })
    }
}

impl ElementMatcher for LegacyMemberNameLink {
    fn name(&self) -> &'static str {
        "legacy-member-name-link"
    }

    fn collect(&self, document: &Html, file: &Path, links: &mut Vec<RawLink>) -> IndexResult<()> {
        for span in document.select(&self.span) {
            let Some(anchor) = span.select(&self.anchor).next() else {
                let parent = span
                    .parent()
                    .and_then(ElementRef::wrap)
                    .map(|parent| parent.html())
                    .unwrap_or_default();
                return Err(IndexError::MissingAnchor {
                    file: file.to_path_buf(),
                    element: span.html(),
                    parent,
                });
            };
            links.push(raw_link(anchor));
        }
        Ok(())
    }
}

/// Newer generators put the class on the anchor itself.
pub struct MemberNameLink {
    anchor: Selector,
}

impl MemberNameLink {
    pub fn new() -> IndexResult<Self> {
        Ok(Self {
            anchor: selector(r#"a[class="member-name-link"]"#)?,
        })
    }
}

impl ElementMatcher for MemberNameLink {
    fn name(&self) -> &'static str {
        "member-name-link"
    }

    fn collect(&self, document: &Html, _file: &Path, links: &mut Vec<RawLink>) -> IndexResult<()> {
        links.extend(document.select(&self.anchor).map(raw_link));
        Ok(())
    }
}

/// Type links carry a descriptive title such as `title="class in java.util"`.
///
/// Only titles starting with one of the configured descriptors are taken;
/// anything else (type parameters in particular) is ignored.
pub struct TypeTitleLink {
    anchor: Selector,
    title_prefixes: Vec<String>,
}

impl TypeTitleLink {
    pub fn new(title_prefixes: Vec<String>) -> IndexResult<Self> {
        Ok(Self {
            anchor: selector("a[title]")?,
            title_prefixes,
        })
    }

    fn is_type_title(&self, title: &str) -> bool {
        self.title_prefixes
            .iter()
            .any(|prefix| title.starts_with(prefix.as_str()))
    }
}

impl ElementMatcher for TypeTitleLink {
    fn name(&self) -> &'static str {
        "type-title-link"
    }

    fn collect(&self, document: &Html, _file: &Path, links: &mut Vec<RawLink>) -> IndexResult<()> {
        links.extend(
            document
                .select(&self.anchor)
                .filter(|anchor| {
                    anchor
                        .value()
                        .attr("title")
                        .is_some_and(|title| self.is_type_title(title))
                })
                .map(raw_link),
        );
        Ok(())
    }
}

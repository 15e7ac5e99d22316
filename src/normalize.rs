//! Normalization of extracted labels and links.
//!
//! Labels arrive as the inner HTML of an anchor (`<code>List&lt;E&gt;</code>`)
//! and leave as plain symbol text (`List<E>`). Links arrive relative to the
//! index file and leave as absolute `file:` references.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use crate::extract::RawLink;

/// Prefix of every local reference.
pub const FILE_SCHEME: &str = "file:";

const NETWORK_SCHEMES: [&str; 2] = ["http:", "https:"];

/// One symbol and the documentation location that describes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    pub symbol: String,
    pub reference: String,
}

static SPAN_OPEN: OnceLock<Regex> = OnceLock::new();
static TAG_MARKER: OnceLock<Regex> = OnceLock::new();

fn span_open() -> &'static Regex {
    SPAN_OPEN.get_or_init(|| Regex::new(r#"<span class="[^"]*">"#).expect("valid span regex"))
}

/// `@Deprecated `, `@java.lang.FunctionalInterface ` and similar.
fn tag_marker() -> &'static Regex {
    TAG_MARKER.get_or_init(|| Regex::new(r"@[a-zA-Z.]+ ").expect("valid marker regex"))
}

/// Turn a raw link into an entry. Links to remote documentation yield `None`.
pub fn normalize(raw: &RawLink, dir: &Path) -> Option<IndexEntry> {
    let reference = normalize_reference(&raw.href, dir)?;
    Some(IndexEntry {
        symbol: normalize_label(&raw.label),
        reference,
    })
}

/// Clean label markup into symbol text.
pub fn normalize_label(label: &str) -> String {
    let text = label
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("<code>", "")
        .replace("</code>", "");
    let text = span_open().replace_all(&text, "");
    let text = text.replace("</span>", "");
    let text = tag_marker().replace_all(&text, "");
    match text.strip_prefix('@') {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}

/// Resolve `href` against `dir` into a `file:` reference.
///
/// Returns `None` for network links; only local documentation is indexed.
pub fn normalize_reference(href: &str, dir: &Path) -> Option<String> {
    if is_network_link(href) {
        return None;
    }

    let reference = file_reference(&lexical_normalize(&dir.join(href)))
        .replace(['(', ')'], "-");
    Some(tag_marker().replace_all(&reference, "").into_owned())
}

pub fn is_network_link(href: &str) -> bool {
    NETWORK_SCHEMES.iter().any(|scheme| href.contains(scheme))
}

/// `file:` followed by the path.
pub fn file_reference(path: &Path) -> String {
    format!("{FILE_SCHEME}{}", path.display())
}

/// Remove `.` components and fold `..` into its predecessor without touching
/// the filesystem. A `..` directly under the root is dropped.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

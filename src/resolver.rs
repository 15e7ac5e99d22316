//! Input path resolution.
//!
//! Turns the entries of a list file into the concrete, sorted set of index
//! files to scan. An entry is either a literal path or a wildcard confined to
//! the last path component: `/opt/docs/api/index-files/index-*.html` expands,
//! while a `*` inside a directory component never matches anything.

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{IndexError, IndexResult, Resolution, SkipReason, SkippedPath};

const WILDCARD: char = '*';
const SEPARATOR: char = '/';

/// Files that exist, plus the entries that were dropped on the way.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvedFiles {
    /// Sorted bytewise, no duplicates.
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedPath>,
}

/// Read a list file: one entry per line, blank lines and `#` comments ignored.
pub fn read_list_file(path: &Path) -> IndexResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| IndexError::ListFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Resolve every entry and merge the results.
///
/// Missing inputs are logged and collected in [`ResolvedFiles::skipped`]; a
/// malformed wildcard or an unreadable directory aborts the whole resolution.
pub fn resolve_entries<S: AsRef<str>>(entries: &[S]) -> IndexResult<ResolvedFiles> {
    let mut resolved = ResolvedFiles::default();

    for entry in entries {
        match resolve_entry(entry.as_ref())? {
            Resolution::Found(paths) => resolved.files.extend(paths),
            Resolution::Skipped(skipped) => {
                warn!("{skipped}");
                resolved.skipped.push(skipped);
            }
        }
    }

    // Later stages rely on a stable processing order.
    resolved
        .files
        .sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    resolved.files.dedup();

    Ok(resolved)
}

/// Resolve a single entry.
pub fn resolve_entry(entry: &str) -> IndexResult<Resolution<Vec<PathBuf>>> {
    match entry.find(WILDCARD) {
        None => {
            let path = Path::new(entry);
            if path.exists() {
                Ok(Resolution::Found(vec![path.to_path_buf()]))
            } else {
                Ok(Resolution::Skipped(SkippedPath {
                    entry: entry.to_string(),
                    reason: SkipReason::MissingFile,
                }))
            }
        }
        Some(wildcard_pos) => expand_wildcard(entry, wildcard_pos),
    }
}

fn expand_wildcard(entry: &str, wildcard_pos: usize) -> IndexResult<Resolution<Vec<PathBuf>>> {
    let slash_pos = entry[..wildcard_pos].rfind(SEPARATOR).ok_or_else(|| {
        IndexError::GlobWithoutDirectory {
            entry: entry.to_string(),
        }
    })?;

    let dir = match &entry[..slash_pos] {
        "" => Path::new("/"),
        dir => Path::new(dir),
    };
    let file_pattern = &entry[slash_pos + 1..];
    let pattern = Pattern::new(file_pattern).map_err(|source| IndexError::InvalidPattern {
        entry: entry.to_string(),
        source,
    })?;

    debug!("expanding '{file_pattern}' in {}", dir.display());

    if !dir.exists() {
        return Ok(Resolution::Skipped(SkippedPath {
            entry: entry.to_string(),
            reason: SkipReason::MissingDirectory(dir.to_path_buf()),
        }));
    }

    Ok(Resolution::Found(matching_entries(dir, &pattern)?))
}

/// List `dir` and keep the entries whose file name matches `pattern`.
///
/// The directory handle lives only for the duration of the loop and is
/// released on every exit path, including `?`.
fn matching_entries(dir: &Path, pattern: &Pattern) -> IndexResult<Vec<PathBuf>> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut matches = Vec::new();
    for dir_entry in fs::read_dir(dir).map_err(|e| IndexError::io(dir, e))? {
        let dir_entry = dir_entry.map_err(|e| IndexError::io(dir, e))?;
        let file_name = dir_entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if pattern.matches_with(name, options) {
            matches.push(dir.join(name));
        }
    }

    Ok(matches)
}

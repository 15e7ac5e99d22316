//! Error types for index generation.
//!
//! Two kinds of failure exist. Fatal conditions are [`IndexError`] values and
//! abort the whole run, because a partial index would be silently wrong.
//! Recoverable conditions (an optional input that is simply absent) are
//! reported as [`Resolution::Skipped`] and the run continues.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these stops the run before output is written.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Cannot read list file {path}")]
    ListFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Glob pattern contains no directory separator: {entry}")]
    GlobWithoutDirectory { entry: String },

    #[error("Invalid glob pattern '{entry}'")]
    InvalidPattern {
        entry: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Null parent directory for {path}")]
    NoParent { path: PathBuf },

    #[error("In {file}, no <a href=...> in: {element}\nparent = {parent}")]
    MissingAnchor {
        file: PathBuf,
        element: String,
        parent: String,
    },

    #[error("IO error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("Configuration error")]
    Config(#[from] Box<figment::Error>),
}

impl IndexError {
    /// Attach a path to an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type IndexResult<T> = Result<T, IndexError>;

/// Reason why an input entry was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A literal path that does not exist.
    MissingFile,
    /// The directory part of a wildcard entry does not exist.
    MissingDirectory(PathBuf),
}

/// An input entry that was dropped without failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
    pub entry: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::MissingFile => write!(f, "Didn't find {}", self.entry),
            SkipReason::MissingDirectory(dir) => write!(f, "Didn't find {}", dir.display()),
        }
    }
}

/// Outcome of a recoverable step: either a value or a skip with its reason.
///
/// Fatal conditions are carried by the surrounding `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(T),
    Skipped(SkippedPath),
}

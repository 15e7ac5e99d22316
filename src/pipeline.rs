//! Sequential indexing pipeline.
//!
//! Each input file is read, parsed, classified and absorbed into the index
//! before the next one is touched. The first fatal error stops the run and
//! nothing is rendered.

use scraper::Html;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{IndexError, IndexResult};
use crate::extract::MarkupExtractor;
use crate::index::SymbolIndex;
use crate::normalize::{lexical_normalize, normalize};
use crate::prefix::PrefixClassifier;

/// Everything needed to render the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    /// Input files in processing order, as given
    pub inputs: Vec<String>,
    pub symbols: SymbolIndex,
    /// Ascending
    pub ignored_prefixes: Vec<String>,
}

/// Counters for a single input file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub links: usize,
    pub new_entries: usize,
    pub remote_links: usize,
    pub new_prefixes: usize,
}

pub struct IndexPipeline {
    extractor: MarkupExtractor,
    classifier: PrefixClassifier,
    symbols: SymbolIndex,
    inputs: Vec<String>,
}

impl IndexPipeline {
    pub fn new(settings: &Settings) -> IndexResult<Self> {
        Ok(Self {
            extractor: MarkupExtractor::new(&settings.extraction)?,
            classifier: PrefixClassifier::new(settings.layout.clone()),
            symbols: SymbolIndex::new(),
            inputs: Vec::new(),
        })
    }

    /// Absorb one index file.
    pub fn index_file(&mut self, path: &Path) -> IndexResult<FileStats> {
        debug!("About to parse: {}", path.display());

        let bytes = fs::read(path).map_err(|e| IndexError::io(path, e))?;
        let document = Html::parse_document(&String::from_utf8_lossy(&bytes));

        // `..` must be folded before classifying, or prefixes and references diverge
        let absolute =
            lexical_normalize(&std::path::absolute(path).map_err(|e| IndexError::io(path, e))?);
        let dir = absolute.parent().ok_or_else(|| IndexError::NoParent {
            path: path.to_path_buf(),
        })?;

        let mut stats = FileStats {
            new_prefixes: self.classifier.add_prefixes(&absolute, dir)?,
            ..FileStats::default()
        };

        for link in self.extractor.extract(&document, path)? {
            stats.links += 1;
            match normalize(&link, dir) {
                Some(entry) => {
                    if self.symbols.insert(entry) {
                        stats.new_entries += 1;
                    }
                }
                None => stats.remote_links += 1,
            }
        }

        debug!(
            "{}: {} link(s), {} new entr(ies), {} remote, {} new prefix(es)",
            path.display(),
            stats.links,
            stats.new_entries,
            stats.remote_links,
            stats.new_prefixes
        );
        self.inputs.push(path.display().to_string());
        Ok(stats)
    }

    /// Absorb every file in order, stopping at the first fatal error.
    pub fn index_files(&mut self, paths: &[PathBuf]) -> IndexResult<()> {
        for path in paths {
            self.index_file(path)?;
        }
        info!(
            "Indexed {} file(s): {} symbol(s), {} reference(s), {} ignored prefix(es)",
            self.inputs.len(),
            self.symbols.len(),
            self.symbols.reference_count(),
            self.classifier.len()
        );
        Ok(())
    }

    pub fn finish(self) -> IndexReport {
        IndexReport {
            inputs: self.inputs,
            ignored_prefixes: self.classifier.prefixes().map(str::to_string).collect(),
            symbols: self.symbols,
        }
    }
}

/// Build the report for `paths`.
pub fn build_index(paths: &[PathBuf], settings: &Settings) -> IndexResult<IndexReport> {
    let mut pipeline = IndexPipeline::new(settings)?;
    pipeline.index_files(paths)?;
    Ok(pipeline.finish())
}

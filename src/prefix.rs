//! Ignored-prefix classification.
//!
//! For every index file we record the documentation root it belongs to, so
//! the editor can hide installation paths when it displays a reference.
//! Documentation trees are not laid out uniformly, so the root is found by a
//! short sequence of special cases driven by [`LayoutConfig`]:
//!
//! 1. the directory holding the index file;
//! 2. its parent, if that directory is the split-index subdirectory;
//! 3. a vendor subdirectory of the root, if one exists;
//! 4. for a modular JDK tree, each module directory instead of the root.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::{IndexError, IndexResult};
use crate::normalize::file_reference;

/// Decides which directories are ignorable and owns the resulting set.
#[derive(Debug, Clone)]
pub struct PrefixClassifier {
    layout: LayoutConfig,
    prefixes: BTreeSet<String>,
}

impl PrefixClassifier {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            prefixes: BTreeSet::new(),
        }
    }

    /// Classify the directory `dir` that holds `index_file` and record its
    /// ignorable prefixes. Returns how many prefixes were new.
    pub fn add_prefixes(&mut self, index_file: &Path, dir: &Path) -> IndexResult<usize> {
        let mut added = 0;
        for root in self.classify(index_file, dir)? {
            if self.prefixes.insert(file_reference(&root)) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Compute the ignorable directories for `dir` without recording them.
    pub fn classify(&self, index_file: &Path, dir: &Path) -> IndexResult<Vec<PathBuf>> {
        let no_parent = || IndexError::NoParent {
            path: index_file.to_path_buf(),
        };

        let dir_name = dir.file_name().ok_or_else(no_parent)?;
        let mut root = dir.to_path_buf();
        if dir_name == self.layout.index_dir_name.as_str() {
            root = dir.parent().ok_or_else(no_parent)?.to_path_buf();
        }

        if let Some(vendor_root) = self
            .layout
            .vendor_subdirs
            .iter()
            .map(|subdir| root.join(subdir))
            .find(|candidate| candidate.is_dir())
        {
            root = vendor_root;
        }

        if root.join(&self.layout.module_marker).exists() {
            debug!("{} is a modular JDK tree", root.display());
            return self.module_dirs(&root);
        }

        Ok(vec![root])
    }

    /// Module directories of a JDK tree, e.g. `java.base` and `jdk.compiler`.
    fn module_dirs(&self, root: &Path) -> IndexResult<Vec<PathBuf>> {
        let mut modules = Vec::new();
        for entry in fs::read_dir(root).map_err(|e| IndexError::io(root, e))? {
            let path = entry.map_err(|e| IndexError::io(root, e))?.path();
            if !path.is_dir() {
                continue;
            }
            let is_module = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| {
                    self.layout
                        .module_prefixes
                        .iter()
                        .any(|prefix| name.starts_with(prefix.as_str()))
                });
            if is_module {
                modules.push(path);
            }
        }
        modules.sort();
        Ok(modules)
    }

    /// Recorded prefixes in ascending order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

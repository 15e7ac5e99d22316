//! Symbol to reference mapping.

use std::collections::{BTreeMap, BTreeSet};

use crate::normalize::IndexEntry;

/// Accumulates entries for one run. References per symbol form a set, so
/// inserting the same pair twice has no effect.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolIndex {
    symbols: BTreeMap<String, BTreeSet<String>>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry`. Returns `false` if the pair was already present.
    pub fn insert(&mut self, entry: IndexEntry) -> bool {
        self.symbols
            .entry(entry.symbol)
            .or_default()
            .insert(entry.reference)
    }

    /// Symbols in strictly descending order, each with its references in
    /// ascending order.
    ///
    /// The editor tries candidates in this order, so a longer symbol sharing a
    /// prefix with a shorter one must come first.
    pub fn descending(&self) -> impl Iterator<Item = (&str, impl Iterator<Item = &str>)> {
        self.symbols
            .iter()
            .rev()
            .map(|(symbol, refs)| (symbol.as_str(), refs.iter().map(String::as_str)))
    }

    pub fn references(&self, symbol: &str) -> Option<&BTreeSet<String>> {
        self.symbols.get(symbol)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Total number of (symbol, reference) pairs
    pub fn reference_count(&self) -> usize {
        self.symbols.values().map(BTreeSet::len).sum()
    }
}

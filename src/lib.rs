//! Builds a symbol lookup index for Emacs from generated Java API documentation.
//!
//! The flow is: [`resolver`] expands the list of index pages, [`pipeline`]
//! parses each page, [`extract`] pulls symbol links out of it, [`normalize`]
//! cleans them, [`index`] collects them and [`prefix`] records the
//! documentation roots. [`output`] renders the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod index;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod prefix;
pub mod resolver;

pub use config::Settings;
pub use error::{IndexError, IndexResult, Resolution, SkipReason, SkippedPath};
pub use index::SymbolIndex;
pub use normalize::IndexEntry;
pub use pipeline::{IndexPipeline, IndexReport, build_index};
pub use prefix::PrefixClassifier;

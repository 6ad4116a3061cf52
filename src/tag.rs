//! Tag model and aggregation.
//!
//! A tag is a named block of documentation text extracted from a source
//! comment. The extractor produces [`Raw`] records in scan order; the
//! aggregator folds them into the run-wide, name-keyed table that every
//! template binding reads from.

use indexmap::IndexMap;
use log::warn;
use std::path::PathBuf;

/// A single marker occurrence as discovered in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    /// Identifier parsed from the marker line.
    pub name: String,
    /// Accumulated text following the marker, comment syntax stripped.
    pub content: String,
    /// File the marker was found in, relative to the scanned root.
    pub source_file: PathBuf,
}

/// An aggregated tag as exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

/// Builds the name-keyed tag table from the raw scan results.
///
/// The table preserves first-seen insertion order. When two raw tags share
/// a name, the last occurrence in scan order wins and a warning names the
/// surviving source file.
///
/// # Arguments
/// * `raw_tags` - All marker occurrences from one project scan
///
/// # Returns
/// * `IndexMap<String, Tag>` - The aggregated, read-only tag table
pub fn aggregate(raw_tags: Vec<Raw>) -> IndexMap<String, Tag> {
    let mut table = IndexMap::new();

    for raw in raw_tags {
        let Raw { name, content, source_file } = raw;
        if table.contains_key(&name) {
            warn!(
                "duplicate tag '{}': keeping the occurrence from '{}'",
                name,
                source_file.display()
            );
        }
        table.insert(name.clone(), Tag { name, value: content });
    }

    table
}

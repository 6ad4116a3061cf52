//! Ignore-aware project scanning.
//!
//! Walks the project tree and feeds every eligible file through a
//! [`TagFinder`], concatenating all results into one raw tag sequence.
//! `.whydocignore` files may appear at any directory level and follow
//! gitignore syntax, scoped to their own subtree.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use ignore::WalkBuilder;
use log::debug;

use crate::error::{Error, Result};
use crate::finder::TagFinder;
use crate::tag::Raw;

/// whydoc's ignore file name.
pub const IGNORE_FILE: &str = ".whydocignore";

/// Scans `project_dir` and extracts tags from every eligible file.
///
/// The root is resolved to an absolute path first so ignore matching and
/// reported tag paths do not depend on the working directory. The walk is
/// depth-first in sorted file-name order, prunes anything matched by
/// `.whydocignore` rules (and `.git` directories, always), and fails fast
/// on the first walk or read error.
///
/// # Arguments
/// * `project_dir` - Root of the tree to scan
/// * `finder` - Tag extractor applied to each eligible file
/// * `extensions` - Allow-list of file-name suffixes; empty allows all
///
/// # Returns
/// * `Result<Vec<Raw>>` - All tags of the project in scan order
pub fn load_tags(
    project_dir: &Path,
    finder: &dyn TagFinder,
    extensions: &[String],
) -> Result<Vec<Raw>> {
    let root = project_dir
        .canonicalize()
        .map_err(|source| Error::PathError { path: project_dir.to_path_buf(), source })?;

    let mut all_tags = Vec::new();

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .add_custom_ignore_filename(IGNORE_FILE)
        .filter_entry(|entry| entry.file_name() != OsStr::new(".git"))
        .sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !has_allowed_extension(&file_name, extensions) {
            debug!("skipping '{}': extension not allowed", entry.path().display());
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();
        debug!("scanning '{}'", relative.display());

        let content = fs::read_to_string(path)
            .map_err(|source| Error::PathError { path: relative.clone(), source })?;

        let tags = finder.find(&relative, &content)?;
        all_tags.extend(tags);
    }

    Ok(all_tags)
}

/// Case-sensitive suffix match against the allow-list; an empty list
/// makes every file eligible.
fn has_allowed_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions.is_empty() || extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
}

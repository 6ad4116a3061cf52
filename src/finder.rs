//! Tag extraction from file contents.
//!
//! Scans text line by line for `@WHY <name>` / `@DOC <name>` markers
//! embedded in comments. A marker opens a tag; every following comment
//! line belongs to it (leader syntax stripped) until a blank line, a
//! non-comment line, a block-comment terminator or the next marker.

use std::path::Path;

use crate::error::{Error, Result};
use crate::tag::Raw;

/// Marker keywords that open a tag block.
pub const MARKERS: [&str; 2] = ["@WHY", "@DOC"];

/// Trait for extracting raw tags from one file's contents.
pub trait TagFinder {
    /// Extracts all tags from `content`.
    ///
    /// # Arguments
    /// * `path` - Path of the file, used for diagnostics only
    /// * `content` - The file's full textual content
    ///
    /// # Returns
    /// * `Result<Vec<Raw>>` - All discovered tags in order of appearance;
    ///   a file without markers yields an empty vector, not an error
    fn find(&self, path: &Path, content: &str) -> Result<Vec<Raw>>;
}

/// The default line-oriented comment scanner.
pub struct CommentTagFinder;

impl TagFinder for CommentTagFinder {
    fn find(&self, path: &Path, content: &str) -> Result<Vec<Raw>> {
        let mut tags = Vec::new();
        let mut current: Option<(String, Vec<String>)> = None;

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() || is_block_end(trimmed) {
                close_tag(&mut current, &mut tags, path);
                continue;
            }

            let Some(text) = strip_comment_leader(trimmed) else {
                close_tag(&mut current, &mut tags, path);
                continue;
            };

            if let Some(remainder) = strip_marker(text) {
                close_tag(&mut current, &mut tags, path);
                let Some(name) = remainder.split_whitespace().next() else {
                    return Err(Error::MarkerError {
                        path: path.to_path_buf(),
                        line: index + 1,
                    });
                };
                current = Some((name.to_string(), Vec::new()));
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(strip_block_end(text).to_string());
            }
        }

        close_tag(&mut current, &mut tags, path);
        Ok(tags)
    }
}

/// Closes the running tag block, if any, and appends it to `tags`.
fn close_tag(current: &mut Option<(String, Vec<String>)>, tags: &mut Vec<Raw>, path: &Path) {
    if let Some((name, lines)) = current.take() {
        let content = lines.join("\n").trim_end().to_string();
        tags.push(Raw { name, content, source_file: path.to_path_buf() });
    }
}

fn is_block_end(trimmed: &str) -> bool {
    trimmed.starts_with("*/") || trimmed.starts_with("-->")
}

/// Strips a leading comment token from an already-trimmed line.
///
/// Returns `None` when the line does not look like a comment. Doc-comment
/// variants (`///`, `//!`, `#!`) collapse into their base leader, and at
/// most one following space is consumed so indented tag content survives.
fn strip_comment_leader(trimmed: &str) -> Option<&str> {
    for opener in ["/*", "<!--"] {
        if let Some(rest) = trimmed.strip_prefix(opener) {
            return Some(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }

    for leader in ["//", "#", "--", ";", "*"] {
        if let Some(rest) = trimmed.strip_prefix(leader) {
            let rest = rest.trim_start_matches(['/', '!']);
            return Some(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }

    None
}

/// Returns the text after the marker keyword if `text` starts with one.
fn strip_marker(text: &str) -> Option<&str> {
    MARKERS.iter().find_map(|marker| {
        text.strip_prefix(marker)
            .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
    })
}

/// Drops a trailing block-comment terminator from a content line.
fn strip_block_end(text: &str) -> &str {
    let text = text.trim_end();
    text.strip_suffix("*/")
        .or_else(|| text.strip_suffix("-->"))
        .unwrap_or(text)
        .trim_end()
}

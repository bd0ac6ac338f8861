// src/discovery.rs
//! Expands wildcard module arguments into concrete file paths.

use crate::error::{Result, ScopeError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const WILDCARD: char = '*';

/// Expands one path argument.
///
/// Without a `*` marker the argument passes through unchanged; resolving it
/// is the loader's job. With exactly one marker, the entries directly inside
/// the pattern's directory are listed and names matching the text around the
/// marker are kept. Enumeration order follows the filesystem and is not
/// guaranteed stable.
///
/// # Errors
/// Returns `ScopeError::Pattern` if the argument contains more than one `*`.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    match pattern.matches(WILDCARD).count() {
        0 => Ok(vec![PathBuf::from(pattern)]),
        1 => Ok(expand_wildcard(pattern)),
        _ => Err(ScopeError::Pattern(pattern.to_string())),
    }
}

fn expand_wildcard(pattern: &str) -> Vec<PathBuf> {
    let Some((head, suffix)) = pattern.split_once(WILDCARD) else {
        return Vec::new();
    };

    // Directory part keeps its trailing separator so joins stay literal;
    // an argument with no separator lists the current directory and yields
    // bare file names.
    let (dir, prefix) = match head.rfind(std::path::is_separator) {
        Some(idx) => (&head[..=idx], &head[idx + 1..]),
        None => ("", head),
    };
    let list_dir = if dir.is_empty() { Path::new(".") } else { Path::new(dir) };

    let mut matches = Vec::new();
    for entry in WalkDir::new(list_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .flatten()
    {
        let name = entry.file_name().to_string_lossy();
        if name_matches(&name, prefix, suffix) {
            if dir.is_empty() {
                matches.push(PathBuf::from(name.as_ref()));
            } else {
                matches.push(Path::new(dir).join(name.as_ref()));
            }
        }
    }
    matches
}

/// Prefix and suffix must match disjoint parts of the name.
fn name_matches(name: &str, prefix: &str, suffix: &str) -> bool {
    name.len() >= prefix.len() + suffix.len()
        && name.starts_with(prefix)
        && name.ends_with(suffix)
}

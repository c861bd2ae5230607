//! Collection file discovery.
//!
//! Uses the `ignore` crate for gitignore-aware directory walking with support
//! for a custom `.folioignore` file, and a `globset` matcher for collection
//! membership so ignore files keep the last word. A file belongs to a collection when a
//! directory named after the collection appears anywhere in its path below
//! the content root, e.g. `content/certifications/aws/index.md`.

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::error::ContentError;

/// Custom ignore file honoured during discovery.
pub const IGNORE_FILENAME: &str = ".folioignore";

/// Include globs for `collection` with each of `extensions`.
#[must_use]
pub fn collection_globs(collection: &str, extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!("**/{collection}/**/*.{ext}"))
        .collect()
}

fn collection_matcher(collection: &str, extensions: &[String]) -> Result<GlobSet, ContentError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in collection_globs(collection, extensions) {
        let glob = Glob::new(&pattern).map_err(|source| ContentError::Glob {
            glob: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ContentError::Glob {
        glob: collection.to_string(),
        source,
    })
}

/// Walk `root` and return the collection's content files, sorted by path.
///
/// Unreadable directory entries are logged and skipped.
///
/// # Errors
///
/// Returns [`ContentError::RootNotFound`] if `root` is not a directory and
/// [`ContentError::Glob`] if a collection glob does not compile.
pub fn discover_files(
    root: &Path,
    collection: &str,
    extensions: &[String],
) -> Result<Vec<PathBuf>, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let matcher = collection_matcher(collection, extensions)?;

    let mut builder = WalkBuilder::new(root);
    builder.add_custom_ignore_filename(IGNORE_FILENAME);

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "discover: skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if matcher.is_match(relative) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!(
        root = %root.display(),
        collection,
        count = files.len(),
        "discover: collection files found"
    );
    Ok(files)
}

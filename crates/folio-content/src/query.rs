//! The archive page's build-time query.
//!
//! Equivalent to "all markdown files under the collection directory, sorted
//! by frontmatter date descending".

use std::path::{Path, PathBuf};

use folio_config::ContentConfig;
use folio_core::{Entry, unique_ids};

use crate::discover::discover_files;
use crate::error::ContentError;
use crate::frontmatter::{parse_header, split};
use crate::markdown::render_body;

/// Where to look and what to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    pub root: PathBuf,
    pub collection: String,
    pub extensions: Vec<String>,
}

impl ContentQuery {
    /// Resolve a content config against the project root.
    #[must_use]
    pub fn from_config(project_root: &Path, config: &ContentConfig) -> Self {
        Self {
            root: project_root.join(&config.root),
            collection: config.collection.clone(),
            extensions: config.extensions.clone(),
        }
    }
}

/// Run the query: discover, parse, sort newest first, and make ids unique.
///
/// # Errors
///
/// Fails on the first file that cannot be read or parsed, naming the file.
pub fn query_entries(query: &ContentQuery) -> Result<Vec<Entry>, ContentError> {
    let files = discover_files(&query.root, &query.collection, &query.extensions)?;

    let mut entries = files
        .iter()
        .map(|path| load_entry(path))
        .collect::<Result<Vec<_>, _>>()?;

    sort_newest_first(&mut entries);
    assign_unique_ids(&mut entries);

    tracing::info!(
        collection = %query.collection,
        count = entries.len(),
        "query: entries loaded"
    );
    Ok(entries)
}

/// Read and parse one content file.
///
/// # Errors
///
/// See [`ContentError`].
pub fn load_entry(path: &Path) -> Result<Entry, ContentError> {
    let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_entry(path, &source)
}

/// Parse the text of a content file. `path` is used for diagnostics only.
///
/// # Errors
///
/// See [`ContentError`].
pub fn parse_entry(path: &Path, source: &str) -> Result<Entry, ContentError> {
    let document = split(source).ok_or_else(|| ContentError::MissingFrontmatter {
        path: path.to_path_buf(),
    })?;

    let frontmatter = parse_header(document.header).map_err(|source| ContentError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;

    if frontmatter
        .title
        .as_deref()
        .is_none_or(|title| title.trim().is_empty())
    {
        tracing::warn!(path = %path.display(), "query: entry has no title");
    }

    let entry = Entry::from_frontmatter(frontmatter, render_body(document.body)).map_err(
        |source| ContentError::InvalidEntry {
            path: path.to_path_buf(),
            source,
        },
    )?;

    tracing::debug!(path = %path.display(), id = %entry.id, "query: parsed entry");
    Ok(entry.with_source(path))
}

/// Date descending; equal dates fall back to title, then source path.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.source.cmp(&b.source))
    });
}

/// Suffix colliding ids (`-2`, `-3`, …) in list order.
pub fn assign_unique_ids(entries: &mut [Entry]) {
    let unique = unique_ids(entries.iter().map(|entry| &entry.id));

    for (entry, id) in entries.iter_mut().zip(unique) {
        if entry.id != id {
            tracing::warn!(id = %entry.id, renamed = %id, "query: duplicate entry id");
            entry.id = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(date: &str, title: &str) -> Entry {
        parse_entry(
            Path::new("mem.md"),
            &format!("---\ndate: {date}\ntitle: {title}\n---\n"),
        )
        .unwrap()
    }

    #[test]
    fn sorts_by_date_descending_then_title() {
        let mut entries = vec![
            entry("2021-05-01", "Old"),
            entry("2023-01-15", "Beta"),
            entry("2023-01-15", "Alpha"),
            entry("2022-06-01", "Mid"),
        ];
        sort_newest_first(&mut entries);
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Mid", "Old"]);
    }

    #[test]
    fn duplicate_ids_get_suffixes() {
        let mut entries = vec![
            entry("2023-01-15", "Same"),
            entry("2023-01-15", "Same"),
            entry("2023-01-15", "Same"),
        ];
        assign_unique_ids(&mut entries);
        let ids: Vec<_> = entries.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "2023-01-15-same",
                "2023-01-15-same-2",
                "2023-01-15-same-3",
            ]
        );
    }

    #[test]
    fn suffix_skips_ids_already_taken() {
        let mut entries = vec![
            entry("2023-01-15", "Same 2"),
            entry("2023-01-15", "Same"),
            entry("2023-01-15", "Same"),
        ];
        assign_unique_ids(&mut entries);
        assert_eq!(entries[2].id.as_str(), "2023-01-15-same-3");
    }

    #[test]
    fn body_becomes_description() {
        let entry = parse_entry(
            Path::new("cert.md"),
            "---\ndate: 2023-01-15\ntitle: With Body\n---\nIssued after a *practical* exam.\n",
        )
        .unwrap();
        assert_eq!(
            entry.description.unwrap().as_str(),
            "<p>Issued after a <em>practical</em> exam.</p>\n"
        );
        assert_eq!(entry.source, Some(PathBuf::from("cert.md")));
    }

    #[test]
    fn missing_frontmatter_names_the_file() {
        let err = parse_entry(Path::new("plain.md"), "# Just markdown\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontmatter { .. }));
        assert!(err.to_string().contains("plain.md"));
    }

    #[test]
    fn bad_date_names_the_file() {
        let err = parse_entry(Path::new("bad.md"), "---\ndate: someday\ntitle: X\n---\n")
            .unwrap_err();
        assert!(matches!(err, ContentError::InvalidEntry { .. }));
        assert!(err.to_string().contains("bad.md"));
        assert!(err.to_string().contains("someday"));
    }

    #[test]
    fn config_root_is_joined_to_project() {
        let query = ContentQuery::from_config(Path::new("/site"), &ContentConfig::default());
        assert_eq!(query.root, PathBuf::from("/site/content"));
        assert_eq!(query.collection, "certifications");
    }
}

//! End-to-end query over a content tree on disk.

use std::fs;
use std::path::Path;

use folio_content::{ContentError, ContentQuery, query_entries};
use folio_core::LinkKind;
use pretty_assertions::assert_eq;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn query(root: &Path) -> ContentQuery {
    ContentQuery {
        root: root.to_path_buf(),
        collection: "certifications".into(),
        extensions: vec!["md".into()],
    }
}

#[test]
fn loads_collection_sorted_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "certifications/solo/index.md",
        "---\ndate: '2022-06-01'\ntitle: 'Solo Cert'\n---\n",
    );
    write(
        dir.path(),
        "certifications/example/index.md",
        "---\ndate: '2023-01-15'\ntitle: 'Example Cert'\ncompany: 'Acme'\ngithub: 'https://x'\nexternal:\n---\n\nCovers **everything**.\n",
    );
    write(
        dir.path(),
        "projects/unrelated/index.md",
        "---\ndate: '2024-01-01'\ntitle: 'Not A Cert'\n---\n",
    );

    let entries = query_entries(&query(dir.path())).unwrap();
    assert_eq!(entries.len(), 2);

    let first = &entries[0];
    assert_eq!(first.title, "Example Cert");
    assert_eq!(first.date_label(), "Jan 2023");
    assert_eq!(first.company.as_deref(), Some("Acme"));
    let kinds: Vec<_> = first.links.present().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, vec![LinkKind::GitHub]);
    assert!(first.description.is_some());

    let second = &entries[1];
    assert_eq!(second.title, "Solo Cert");
    assert_eq!(second.date_label(), "Jun 2022");
    assert_eq!(second.company, None);
    assert_eq!(second.links.present().count(), 0);
    assert_eq!(second.description, None);
}

#[test]
fn empty_collection_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("certifications")).unwrap();
    let entries = query_entries(&query(dir.path())).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn first_bad_file_aborts_the_query() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "certifications/good.md",
        "---\ndate: 2023-01-15\ntitle: Good\n---\n",
    );
    write(
        dir.path(),
        "certifications/broken.md",
        "---\ntitle: [broken\n---\n",
    );

    let err = query_entries(&query(dir.path())).unwrap_err();
    assert!(matches!(err, ContentError::Frontmatter { .. }));
    assert!(err.to_string().contains("broken.md"));
}

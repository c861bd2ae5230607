use folio_core::Entry;
use folio_page::{ArchivePage, Location};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// One archive row as the `list` command reports it.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ListRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub company: String,
    pub links: Vec<&'static str>,
    pub description: bool,
}

/// Handle `folio list`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = ctx.load_entries()?;
    output(&rows(&entries), flags)
}

pub fn rows(entries: &[Entry]) -> Vec<ListRow> {
    let page = ArchivePage::mount(Location::default(), entries);
    page.rows()
        .into_iter()
        .zip(entries)
        .map(|(row, entry)| ListRow {
            id: row.id.to_string(),
            date: row.date_label.clone(),
            title: row.title.to_string(),
            company: row.company_label().to_string(),
            links: row.links.iter().map(|link| link.kind.field()).collect(),
            description: entry.description.is_some(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::fixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_collection_rows_newest_first() {
        let (_dir, ctx) = fixture();
        let entries = ctx.load_entries().unwrap();

        assert_eq!(
            rows(&entries),
            vec![
                ListRow {
                    id: "2023-01-15-example-cert".into(),
                    date: "Jan 2023".into(),
                    title: "Example Cert".into(),
                    company: "Acme".into(),
                    links: vec!["github"],
                    description: true,
                },
                ListRow {
                    id: "2022-06-01-solo-cert".into(),
                    date: "Jun 2022".into(),
                    title: "Solo Cert".into(),
                    company: "—".into(),
                    links: vec![],
                    description: false,
                },
            ]
        );
    }

    #[test]
    fn empty_list_has_no_rows() {
        assert!(rows(&[]).is_empty());
    }
}

//! Projection of an entry onto a table row.

use folio_core::{Entry, EntryId, LinkKind, TrustedHtml};
use serde::Serialize;

/// Shown in the company column when an entry has no company.
pub const COMPANY_PLACEHOLDER: &str = "—";

/// One icon link in the links column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView<'a> {
    pub kind: LinkKind,
    pub href: &'a str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Everything the table needs to draw one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView<'a> {
    pub id: &'a EntryId,
    pub date_label: String,
    pub title: &'a str,
    pub company: Option<&'a str>,
    pub links: Vec<LinkView<'a>>,
    pub expanded: bool,
    /// Present only when the row is expanded and the entry has a description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a TrustedHtml>,
}

impl<'a> RowView<'a> {
    /// Project `entry` onto the row keyed by `id`.
    #[must_use]
    pub fn project(id: &'a EntryId, entry: &'a Entry, expanded: bool) -> Self {
        let links = entry
            .links
            .present()
            .map(|(kind, href)| LinkView {
                kind,
                href,
                label: kind.aria_label(),
                icon: kind.icon_name(),
            })
            .collect();

        Self {
            id,
            date_label: entry.date_label(),
            title: &entry.title,
            company: entry.company.as_deref(),
            links,
            expanded,
            description: if expanded {
                entry.description.as_ref()
            } else {
                None
            },
        }
    }

    /// Company text, or the dash placeholder when absent or blank.
    #[must_use]
    pub fn company_label(&self) -> &'a str {
        self.company
            .filter(|company| !company.trim().is_empty())
            .unwrap_or(COMPANY_PLACEHOLDER)
    }
}

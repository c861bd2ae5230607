use std::path::PathBuf;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Serialize;

use crate::dates::{month_year_label, parse_entry_date};
use crate::entities::Frontmatter;
use crate::enums::LinkKind;
use crate::errors::CoreError;
use crate::ids::EntryId;
use crate::markup::TrustedHtml;

/// One certification or project record from the content set.
///
/// Entries are immutable once built. The list handed to the page is already
/// sorted by date, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Entry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub title: String,
    pub company: Option<String>,
    pub links: EntryLinks,
    pub description: Option<TrustedHtml>,
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Entry {
    /// Build an entry from parsed frontmatter and a rendered body.
    ///
    /// A missing title becomes an empty string. Blank company values and
    /// blank descriptions are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDate`] when the date is missing or unparseable.
    pub fn from_frontmatter(
        frontmatter: Frontmatter,
        description: Option<TrustedHtml>,
    ) -> Result<Self, CoreError> {
        let date = parse_entry_date(frontmatter.date.as_deref().unwrap_or_default())?;
        let title = frontmatter.title.clone().unwrap_or_default();
        let links = EntryLinks::from_frontmatter(&frontmatter);

        Ok(Self {
            id: EntryId::derive(date, &title),
            date,
            title,
            company: frontmatter.company.filter(|company| !company.trim().is_empty()),
            links,
            description: description.filter(|html| !html.is_blank()),
            source: None,
        })
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Display label for the date column, e.g. `"Jan 2023"`.
    #[must_use]
    pub fn date_label(&self) -> String {
        month_year_label(self.date)
    }
}

/// Optional verification links. A link counts as present only when it is
/// set and not blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EntryLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<String>,
}

impl EntryLinks {
    #[must_use]
    pub fn from_frontmatter(frontmatter: &Frontmatter) -> Self {
        fn keep(value: Option<&String>) -> Option<String> {
            value
                .map(|url| url.trim())
                .filter(|url| !url.is_empty())
                .map(str::to_string)
        }

        Self {
            external: keep(frontmatter.external.as_ref()),
            github: keep(frontmatter.github.as_ref()),
            folder: keep(frontmatter.folder.as_ref()),
            bookmark: keep(frontmatter.bookmark.as_ref()),
            ios: keep(frontmatter.ios.as_ref()),
            android: keep(frontmatter.android.as_ref()),
        }
    }

    /// URL for `kind`, if present and non-blank.
    #[must_use]
    pub fn get(&self, kind: LinkKind) -> Option<&str> {
        let value = match kind {
            LinkKind::External => &self.external,
            LinkKind::GitHub => &self.github,
            LinkKind::Folder => &self.folder,
            LinkKind::Bookmark => &self.bookmark,
            LinkKind::AppStore => &self.ios,
            LinkKind::PlayStore => &self.android,
        };
        value.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Present links in display priority order.
    pub fn present(&self) -> impl Iterator<Item = (LinkKind, &str)> + '_ {
        LinkKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|url| (kind, url)))
    }
}

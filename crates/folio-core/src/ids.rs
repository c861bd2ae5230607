//! Stable entry identifiers.
//!
//! An [`EntryId`] is `"{date}-{title-slug}"`, e.g. `2023-01-15-example-cert`.
//! It survives reordering and insertion in the entry list, so UI state keyed
//! by it never lands on the wrong row.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Derive the id for an entry from its date and title.
    #[must_use]
    pub fn derive(date: NaiveDate, title: &str) -> Self {
        let slug = slugify(title);
        if slug.is_empty() {
            Self(date.format("%Y-%m-%d").to_string())
        } else {
            Self(format!("{}-{slug}", date.format("%Y-%m-%d")))
        }
    }

    /// Disambiguate a colliding id: `n = 2` yields `"{id}-2"`.
    #[must_use]
    pub fn with_suffix(&self, n: usize) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Make every id distinct, in order: a repeat becomes `{id}-2`, `{id}-3`,
/// skipping any suffix that is already taken.
#[must_use]
pub fn unique_ids<'a, I>(ids: I) -> Vec<EntryId>
where
    I: IntoIterator<Item = &'a EntryId>,
{
    let ids = ids.into_iter();
    let mut seen: HashSet<EntryId> = HashSet::with_capacity(ids.size_hint().0);

    ids.map(|id| {
        let mut candidate = id.clone();
        let mut n = 2;
        while seen.contains(&candidate) {
            candidate = id.with_suffix(n);
            n += 1;
        }
        seen.insert(candidate.clone());
        candidate
    })
    .collect()
}

/// Lowercase ASCII alphanumerics joined by single hyphens.
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("Example Cert", "example-cert")]
    #[case("  AWS: Solutions Architect (Associate) ", "aws-solutions-architect-associate")]
    #[case("C++ / Rust", "c-rust")]
    #[case("Zürich Summit", "z-rich-summit")]
    #[case("---", "")]
    fn slugify_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn derive_prefixes_date() {
        let id = EntryId::derive(date(2023, 1, 15), "Example Cert");
        assert_eq!(id.as_str(), "2023-01-15-example-cert");
    }

    #[test]
    fn derive_with_blank_title_uses_date_only() {
        let id = EntryId::derive(date(2022, 6, 1), "   ");
        assert_eq!(id.to_string(), "2022-06-01");
    }

    #[test]
    fn suffix_appends_counter() {
        let id = EntryId::from("2022-06-01-solo-cert");
        assert_eq!(id.with_suffix(2).as_str(), "2022-06-01-solo-cert-2");
    }

    #[test]
    fn unique_ids_suffix_repeats_in_order() {
        let ids = [
            EntryId::from("2023-01-15-same-2"),
            EntryId::from("2023-01-15-same"),
            EntryId::from("2023-01-15-same"),
            EntryId::from("2023-01-15-same"),
        ];
        let unique: Vec<String> = unique_ids(&ids).iter().map(ToString::to_string).collect();
        assert_eq!(
            unique,
            vec![
                "2023-01-15-same-2",
                "2023-01-15-same",
                "2023-01-15-same-3",
                "2023-01-15-same-4",
            ]
        );
    }

    #[test]
    fn unique_ids_keep_distinct_ids() {
        let ids = [EntryId::from("a"), EntryId::from("b")];
        assert_eq!(unique_ids(&ids), ids.to_vec());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntryId::from("2023-01-15-x");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"2023-01-15-x\"");
    }
}

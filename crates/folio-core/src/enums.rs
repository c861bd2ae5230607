//! Link kinds for entry verification links.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// LinkKind
// ---------------------------------------------------------------------------

/// One of the six optional link fields an entry can carry.
///
/// Declaration order is display order; [`LinkKind::ALL`] is the canonical
/// iteration sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    External,
    #[serde(rename = "github")]
    GitHub,
    Folder,
    Bookmark,
    AppStore,
    PlayStore,
}

impl LinkKind {
    /// Every kind, in display priority order.
    pub const ALL: [Self; 6] = [
        Self::External,
        Self::GitHub,
        Self::Folder,
        Self::Bookmark,
        Self::AppStore,
        Self::PlayStore,
    ];

    /// Frontmatter field that carries the URL for this kind.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::GitHub => "github",
            Self::Folder => "folder",
            Self::Bookmark => "bookmark",
            Self::AppStore => "ios",
            Self::PlayStore => "android",
        }
    }

    /// Icon name understood by an icon set.
    #[must_use]
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::External => "External",
            Self::GitHub => "GitHub",
            Self::Folder => "Folder",
            Self::Bookmark => "Bookmark",
            Self::AppStore => "AppStore",
            Self::PlayStore => "PlayStore",
        }
    }

    /// Accessible label for the anchor wrapping the icon.
    #[must_use]
    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::External => "External Link",
            Self::GitHub => "GitHub Link",
            Self::Folder => "Folder",
            Self::Bookmark => "Bookmark",
            Self::AppStore => "Apple App Store Link",
            Self::PlayStore => "Google Play Store Link",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.icon_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = LinkKind::ALL;
        sorted.sort();
        assert_eq!(sorted, LinkKind::ALL);
    }

    #[test]
    fn store_kinds_map_to_platform_fields() {
        assert_eq!(LinkKind::AppStore.field(), "ios");
        assert_eq!(LinkKind::PlayStore.field(), "android");
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&LinkKind::GitHub).unwrap(), "\"github\"");
        assert_eq!(serde_json::to_string(&LinkKind::AppStore).unwrap(), "\"app_store\"");
    }
}

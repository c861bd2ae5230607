//! Icon glyphs for link kinds.

use folio_core::LinkKind;

/// Renders the glyph for a link kind as inline markup.
pub trait IconSet {
    fn render(&self, kind: LinkKind) -> String;
}

/// Feather-style inline SVG icons.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatherIcons;

const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#;

impl FeatherIcons {
    const fn paths(kind: LinkKind) -> &'static str {
        match kind {
            LinkKind::External => {
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path><polyline points="15 3 21 3 21 9"></polyline><line x1="10" y1="14" x2="21" y2="3"></line>"#
            }
            LinkKind::GitHub => {
                r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path>"#
            }
            LinkKind::Folder => {
                r#"<path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"></path>"#
            }
            LinkKind::Bookmark => {
                r#"<path d="M19 21l-7-5-7 5V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z"></path>"#
            }
            LinkKind::AppStore => {
                r#"<rect x="5" y="2" width="14" height="20" rx="2" ry="2"></rect><line x1="12" y1="18" x2="12.01" y2="18"></line>"#
            }
            LinkKind::PlayStore => r#"<polygon points="5 3 19 12 5 21 5 3"></polygon>"#,
        }
    }
}

impl IconSet for FeatherIcons {
    fn render(&self, kind: LinkKind) -> String {
        format!(
            "{SVG_OPEN}<title>{}</title>{}</svg>",
            kind.icon_name(),
            Self::paths(kind)
        )
    }
}

//! Site chrome around the page content.

use folio_config::SiteConfig;
use folio_core::escape_html;

/// The location the page is served at, used for active-link highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
}

impl Location {
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }

    /// Whether `url` points at this location. Trailing slashes are ignored.
    #[must_use]
    pub fn is_current(&self, url: &str) -> bool {
        fn normalize(path: &str) -> &str {
            let trimmed = path.trim_end_matches('/');
            if trimmed.is_empty() { "/" } else { trimmed }
        }
        normalize(&self.pathname) == normalize(url)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/archive")
    }
}

/// Wraps page content with shared navigation and footer.
pub trait Layout {
    /// `content` is trusted markup produced by the page renderer.
    fn wrap(&self, location: &Location, title: &str, content: &str) -> String;
}

/// Default layout driven by the site config.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    site: SiteConfig,
}

impl SiteLayout {
    #[must_use]
    pub const fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    fn nav(&self, location: &Location) -> String {
        let mut items = String::new();
        for link in &self.site.nav {
            let current = if location.is_current(&link.url) {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            items.push_str(&format!(
                "        <li><a href=\"{}\"{current}>{}</a></li>\n",
                escape_html(&link.url),
                escape_html(&link.name),
            ));
        }
        format!("    <nav>\n      <ol>\n{items}      </ol>\n    </nav>\n")
    }
}

impl Layout for SiteLayout {
    fn wrap(&self, location: &Location, title: &str, content: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n  <meta charset=\"utf-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  <title>{title}</title>\n</head>\n<body>\n  <div id=\"root\">\n  <header class=\"site-header\">\n{nav}  </header>\n{content}  <footer class=\"site-footer\"></footer>\n  </div>\n</body>\n</html>\n",
            lang = escape_html(&self.site.lang),
            title = escape_html(title),
            nav = self.nav(location),
        )
    }
}

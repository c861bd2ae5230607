//! Markdown body rendering.

use folio_core::TrustedHtml;
use pulldown_cmark::{Options, Parser, html};

/// Render a markdown body. Blank bodies yield `None`.
#[must_use]
pub fn render_body(body: &str) -> Option<TrustedHtml> {
    if body.trim().is_empty() {
        return None;
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);

    // The markup is generated here from repository content files.
    Some(TrustedHtml::from_pipeline(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_paragraphs_and_emphasis() {
        let html = render_body("Passed with **distinction**.\n").unwrap();
        assert_eq!(html.as_str(), "<p>Passed with <strong>distinction</strong>.</p>\n");
    }

    #[test]
    fn renders_lists() {
        let html = render_body("- one\n- two\n").unwrap();
        assert!(html.as_str().contains("<ul>"));
        assert!(html.as_str().contains("<li>two</li>"));
    }

    #[test]
    fn strikethrough_is_enabled() {
        let html = render_body("~~old~~\n").unwrap();
        assert!(html.as_str().contains("<del>old</del>"));
    }

    #[test]
    fn blank_body_has_no_description() {
        assert_eq!(render_body(""), None);
        assert_eq!(render_body("\n  \n"), None);
    }
}

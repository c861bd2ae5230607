//! Trusted markup and text escaping.
//!
//! [`TrustedHtml`] is the trust boundary for raw markup. The only way to build
//! one is [`TrustedHtml::from_pipeline`], which the build-time content query
//! calls on its own markdown output. It serializes (for JSON listings) but
//! never deserializes, so markup cannot enter through an input document.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup produced by the build-time content pipeline.
    ///
    /// Callers must only pass markup they generated themselves from content
    /// files in the site repository. User input never goes through here.
    #[must_use]
    pub fn from_pipeline(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_html("Jan 2023 — Acme"), "Jan 2023 — Acme");
    }

    #[test]
    fn trusted_html_is_passed_through_verbatim() {
        let html = TrustedHtml::from_pipeline("<p>Hello <em>world</em></p>\n");
        assert_eq!(html.as_str(), "<p>Hello <em>world</em></p>\n");
        assert!(!html.is_blank());
        assert!(TrustedHtml::from_pipeline(" \n").is_blank());
    }
}

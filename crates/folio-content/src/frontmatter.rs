//! Split a content file into its YAML header and markdown body.

use folio_core::Frontmatter;

const FENCE: &str = "---";

/// A content file split at its frontmatter fences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub header: &'a str,
    pub body: &'a str,
}

/// Split `source` into header and body.
///
/// The file must open with a `---` line; the header runs to the next line
/// that is exactly `---` or `...`. Returns `None` when either fence is
/// missing.
#[must_use]
pub fn split(source: &str) -> Option<Document<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == FENCE || trimmed == "..." {
            return Some(Document {
                header: &rest[..offset],
                body: &rest[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    None
}

/// Deserialize a YAML header. An empty header yields the default frontmatter.
///
/// # Errors
///
/// Returns the underlying YAML error when the header is malformed.
pub fn parse_header(header: &str) -> Result<Frontmatter, serde_yaml::Error> {
    if header.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(header)
}

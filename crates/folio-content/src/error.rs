//! Content query error types.

use std::path::PathBuf;

/// Errors from discovering and parsing content files.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The configured content root does not exist.
    #[error("content root not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// A collection glob could not be compiled.
    #[error("invalid collection glob '{glob}': {source}")]
    Glob {
        glob: String,
        #[source]
        source: globset::Error,
    },

    /// Reading a content file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file does not start with a `---` fenced YAML header.
    #[error("{}: missing frontmatter (expected a leading '---' block)", path.display())]
    MissingFrontmatter { path: PathBuf },

    /// The YAML header did not deserialize.
    #[error("{}: invalid frontmatter: {source}", path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The header parsed but the entry is unusable (e.g. bad date).
    #[error("{}: {source}", path.display())]
    InvalidEntry {
        path: PathBuf,
        #[source]
        source: folio_core::CoreError,
    },
}

//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (`ContentError`, `PageError`, `ConfigError`) live in
//! their respective crates. The binary converges everything through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Folio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A date string did not match any accepted calendar format.
    #[error("Invalid date '{value}': expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate { value: String },
}

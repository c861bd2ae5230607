//! Page error types.

use folio_core::EntryId;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A toggle named an entry that is not on the page.
    #[error("no entry with id '{id}' on this page")]
    UnknownEntry { id: EntryId },

    /// The reveal bootstrap could not be serialized.
    #[error("failed to serialize reveal options: {0}")]
    Script(#[from] serde_json::Error),
}

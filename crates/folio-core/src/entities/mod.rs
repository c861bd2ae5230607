//! Entity structs for Folio content.

pub mod entry;
pub mod frontmatter;

pub use entry::{Entry, EntryLinks};
pub use frontmatter::Frontmatter;

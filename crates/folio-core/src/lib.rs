//! # folio-core
//!
//! Core types, ID generation, and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - The `Entry` entity and its on-disk `Frontmatter` shape
//! - Stable entry identifiers (`EntryId`) derived from date and title
//! - Link kinds with their fixed display priority
//! - `TrustedHtml`, the only markup the renderer injects unescaped
//! - Calendar date parsing and month/year labels
//! - Cross-cutting error types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod markup;

pub use entities::{Entry, EntryLinks, Frontmatter};
pub use enums::LinkKind;
pub use errors::CoreError;
pub use ids::{EntryId, unique_ids};
pub use markup::{TrustedHtml, escape_html};

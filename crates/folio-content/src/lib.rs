//! # folio-content
//!
//! The build-time content query behind the archive page.
//!
//! - [`discover`]: gitignore-aware walk that keeps the files of one collection
//! - [`frontmatter`]: split a content file into its YAML header and markdown body
//! - [`markdown`]: render a body to [`folio_core::TrustedHtml`]
//! - [`query`]: tie it together and return entries sorted newest first

pub mod discover;
pub mod error;
pub mod frontmatter;
pub mod markdown;
pub mod query;

pub use error::ContentError;
pub use query::{ContentQuery, query_entries};

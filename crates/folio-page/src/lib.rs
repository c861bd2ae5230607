//! # folio-page
//!
//! The archive page component.
//!
//! [`ArchivePage`] binds a pre-sorted entry list to table rows, owns the
//! per-row expansion state, and triggers the entrance reveal once per mount.
//! Everything outside the page (site chrome, icons, the animation library,
//! the user's motion preference) is reached through the traits in
//! [`chrome`] and [`reveal`].

pub mod chrome;
pub mod error;
pub mod html;
pub mod icons;
pub mod page;
pub mod reveal;
pub mod row;
pub mod state;

pub use chrome::{Layout, Location, SiteLayout};
pub use error::PageError;
pub use icons::{FeatherIcons, IconSet};
pub use page::{ArchivePage, DocumentOptions};
pub use reveal::{
    MotionPreference, RevealHook, RevealOptions, RevealTarget, Revealer, ScriptRevealer,
};
pub use row::{LinkView, RowView};
pub use state::ExpansionState;

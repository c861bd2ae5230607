//! The archive page component.

use folio_config::{RevealConfig, SiteConfig};
use folio_core::{Entry, EntryId, unique_ids};

use crate::chrome::{Layout, Location};
use crate::error::PageError;
use crate::html;
use crate::icons::IconSet;
use crate::reveal::{MotionPreference, RevealHook, RevealOptions, RevealTarget, Revealer};
use crate::row::RowView;
use crate::state::ExpansionState;

/// What to emit around the main markup in a full document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Include description templates and the row toggle script.
    pub interactive: bool,
    /// Reveal bootstrap produced by a [`crate::ScriptRevealer`].
    pub reveal_script: Option<String>,
}

/// A mounted archive page.
///
/// Entries are borrowed and never reordered. Each row is keyed by an id that
/// is unique within the page; entries sharing an id get `-2`, `-3` suffixes
/// at mount. Expansion state and the reveal hook live exactly as long as the
/// mount.
#[derive(Debug)]
pub struct ArchivePage<'a> {
    location: Location,
    entries: &'a [Entry],
    ids: Vec<EntryId>,
    site: SiteConfig,
    reveal: RevealConfig,
    expansion: ExpansionState,
    reveal_hook: RevealHook,
}

impl<'a> ArchivePage<'a> {
    /// Mount the page: every row collapsed, reveal not yet run.
    #[must_use]
    pub fn mount(location: Location, entries: &'a [Entry]) -> Self {
        let ids = unique_ids(entries.iter().map(|entry| &entry.id));
        for (entry, id) in entries.iter().zip(&ids) {
            if &entry.id != id {
                tracing::warn!(id = %entry.id, row = %id, "page: duplicate entry id");
            }
        }
        tracing::debug!(path = %location.pathname, entries = entries.len(), "page: mounted");
        Self {
            location,
            entries,
            ids,
            site: SiteConfig::default(),
            reveal: RevealConfig::default(),
            expansion: ExpansionState::new(),
            reveal_hook: RevealHook::new(),
        }
    }

    #[must_use]
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub const fn entries(&self) -> &'a [Entry] {
        self.entries
    }

    /// Row ids, parallel to [`Self::entries`].
    #[must_use]
    pub fn ids(&self) -> &[EntryId] {
        &self.ids
    }

    #[must_use]
    pub const fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Flip one row and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::UnknownEntry`] if no row on the page has `id`.
    pub fn toggle(&mut self, id: &EntryId) -> Result<bool, PageError> {
        if !self.ids.contains(id) {
            return Err(PageError::UnknownEntry { id: id.clone() });
        }
        let expanded = self.expansion.toggle(id);
        tracing::debug!(%id, expanded, "page: row toggled");
        Ok(expanded)
    }

    #[must_use]
    pub fn is_expanded(&self, id: &EntryId) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Row projections in the order received.
    #[must_use]
    pub fn rows(&self) -> Vec<RowView<'_>> {
        self.ids
            .iter()
            .zip(self.entries)
            .map(|(id, entry)| RowView::project(id, entry, self.expansion.is_expanded(id)))
            .collect()
    }

    /// The `<main>` element: header and table.
    #[must_use]
    pub fn render_main(&self, icons: &dyn IconSet) -> String {
        format!(
            "  <main>\n{}{}  </main>\n",
            html::render_header(&self.site.heading, &self.site.subtitle),
            html::render_table(&self.rows(), icons),
        )
    }

    /// A complete HTML document wrapped in `layout`.
    #[must_use]
    pub fn render_document(
        &self,
        layout: &dyn Layout,
        icons: &dyn IconSet,
        options: &DocumentOptions,
    ) -> String {
        let mut content = self.render_main(icons);
        if options.interactive {
            let rows = self.ids.iter().zip(self.entries);
            content.push_str(&html::render_description_templates(rows));
            content.push_str(&html::script_tag(html::TOGGLE_SCRIPT));
        }
        if let Some(script) = &options.reveal_script {
            content.push_str(&html::script_tag(script));
        }
        layout.wrap(&self.location, &self.site.title, &content)
    }

    /// Post-commit reveal effect. Returns the number of reveal calls issued.
    ///
    /// Runs on the first commit and again only if the motion preference has
    /// changed since. Reduced motion issues nothing.
    pub fn commit<M, R>(&mut self, motion: &M, revealer: &mut R) -> usize
    where
        M: MotionPreference + ?Sized,
        R: Revealer + ?Sized,
    {
        let reduced = motion.prefers_reduced_motion();
        if !self.reveal_hook.arm(reduced) {
            return 0;
        }
        if reduced {
            tracing::debug!("page: reduced motion, reveal skipped");
            return 0;
        }

        let base = RevealOptions::from_config(&self.reveal);
        revealer.reveal(&RevealTarget::Header, &base);
        revealer.reveal(
            &RevealTarget::Table,
            &base
                .clone()
                .with_delay(self.reveal.table_delay)
                .with_view_factor(0.0),
        );

        let mut calls = 2;
        for (index, id) in self.ids.iter().enumerate() {
            let step = u32::try_from(index).unwrap_or(u32::MAX);
            let delay = step.saturating_mul(self.reveal.row_stagger);
            revealer.reveal(
                &RevealTarget::Row(id.clone()),
                &base.clone().with_delay(delay),
            );
            calls += 1;
        }

        tracing::debug!(calls, "page: reveal scheduled");
        calls
    }
}

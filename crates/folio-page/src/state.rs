//! Per-row expansion state.

use std::collections::HashSet;

use folio_core::EntryId;

/// Which rows are expanded, keyed by entry id.
///
/// Starts empty on every mount. The only mutation is [`Self::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<EntryId>,
}

impl ExpansionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `id` and return the new value.
    pub fn toggle(&mut self, id: &EntryId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &EntryId) -> bool {
        self.expanded.contains(id)
    }

    /// Number of expanded rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let state = ExpansionState::new();
        assert!(state.is_empty());
        assert!(!state.is_expanded(&EntryId::from("a")));
    }

    #[test]
    fn toggle_twice_restores() {
        let mut state = ExpansionState::new();
        let id = EntryId::from("a");
        assert!(state.toggle(&id));
        assert!(state.is_expanded(&id));
        assert!(!state.toggle(&id));
        assert!(!state.is_expanded(&id));
        assert!(state.is_empty());
    }

    #[test]
    fn rows_are_independent() {
        let mut state = ExpansionState::new();
        let a = EntryId::from("a");
        let b = EntryId::from("b");
        state.toggle(&a);
        assert!(!state.is_expanded(&b));
        state.toggle(&b);
        state.toggle(&a);
        assert!(!state.is_expanded(&a));
        assert!(state.is_expanded(&b));
        assert_eq!(state.len(), 1);
    }
}

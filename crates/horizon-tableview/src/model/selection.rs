//! Selection set for table views.
//!
//! [`SelectionSet`] tracks which items are selected, keyed by
//! [`Identifier::key`]. The position carried by an identifier is kept for
//! reference but never consulted for membership.
//!
//! # Example
//!
//! ```
//! use horizon_tableview::model::{Identifier, SelectionChange, SelectionSet};
//!
//! let mut selection = SelectionSet::new();
//!
//! assert_eq!(selection.toggle(Identifier::new("4", 4)), SelectionChange::Inserted);
//! assert!(selection.contains(&Identifier::new("4", 0)));
//!
//! assert_eq!(selection.toggle(Identifier::new("4", 1)), SelectionChange::Removed);
//! assert!(selection.is_empty());
//! ```

use std::collections::HashSet;

use horizon_tableview_core::logging::targets;

use super::index::Identifier;

/// The effect of a [`SelectionSet::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The identifier was not selected and has been appended.
    Inserted,
    /// An identifier with the same key was selected and has been removed.
    Removed,
}

/// An ordered set of selected identifiers, keyed by identifier key.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    /// Set of selected keys for O(1) lookup.
    selected_keys: HashSet<String>,

    /// Selected identifiers in insertion order.
    selected: Vec<Identifier>,
}

impl SelectionSet {
    /// Creates an empty selection set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles an identifier.
    ///
    /// If an identifier with the same key is selected it is removed,
    /// otherwise `identifier` is appended at the end.
    pub fn toggle(&mut self, identifier: Identifier) -> SelectionChange {
        if self.selected_keys.remove(identifier.key()) {
            self.selected.retain(|id| id.key() != identifier.key());
            tracing::trace!(target: targets::SELECTION, key = identifier.key(), "deselected");
            SelectionChange::Removed
        } else {
            self.selected_keys.insert(identifier.key().to_string());
            tracing::trace!(target: targets::SELECTION, key = identifier.key(), "selected");
            self.selected.push(identifier);
            SelectionChange::Inserted
        }
    }

    /// Checks membership by key; the identifier's position is ignored.
    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.contains_key(identifier.key())
    }

    /// Checks membership for a raw key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.selected_keys.contains(key)
    }

    /// Returns the number of selected identifiers.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the selected identifiers in insertion order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.selected
    }

    /// Removes every identifier.
    pub fn clear(&mut self) {
        self.selected_keys.clear();
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut selection = SelectionSet::new();
        let id = Identifier::new("0", 0);

        assert!(!selection.contains(&id));
        assert_eq!(selection.toggle(id.clone()), SelectionChange::Inserted);
        assert!(selection.contains(&id));
        assert_eq!(selection.toggle(id.clone()), SelectionChange::Removed);
        assert!(!selection.contains(&id));
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut selection = SelectionSet::new();
        selection.toggle(Identifier::new("a", 0));
        selection.toggle(Identifier::new("b", 1));

        for key in ["a", "c"] {
            let before: Vec<_> = selection.identifiers().iter().map(|i| i.key().to_string()).collect();
            let was_member = selection.contains_key(key);

            selection.toggle(Identifier::new(key, 10));
            selection.toggle(Identifier::new(key, 20));

            assert_eq!(selection.contains_key(key), was_member);
            if !was_member {
                let after: Vec<_> = selection.identifiers().iter().map(|i| i.key().to_string()).collect();
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_membership_ignores_position() {
        let mut selection = SelectionSet::new();
        selection.toggle(Identifier::new("item", 3));

        assert!(selection.contains(&Identifier::new("item", 0)));
        assert!(selection.contains(&Identifier::new("item", 99)));

        // Removal also matches by key, whatever the stored position.
        assert_eq!(selection.toggle(Identifier::new("item", 7)), SelectionChange::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut selection = SelectionSet::new();
        selection.toggle(Identifier::new("2", 2));
        selection.toggle(Identifier::new("0", 0));
        selection.toggle(Identifier::new("1", 1));
        selection.toggle(Identifier::new("0", 0));

        let keys: Vec<&str> = selection.identifiers().iter().map(Identifier::key).collect();
        assert_eq!(keys, vec!["2", "1"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::new();
        selection.toggle(Identifier::new("x", 0));
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.contains_key("x"));
    }
}

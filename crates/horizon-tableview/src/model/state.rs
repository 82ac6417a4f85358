//! The selection-and-filtering state behind a table view.
//!
//! [`ListViewState`] keeps two parallel section arrays: the full data and a
//! filtered copy. Which one is authoritative for a lookup depends on two mode
//! flags, resolved by [`ListViewState::items_for_section`]:
//!
//! | `all_selected` | `secondary_filter_active` | reads from |
//! |---|---|---|
//! | `false` | any | filtered sections |
//! | `true` | `true` | filtered sections |
//! | `true` | `false` | all sections |
//!
//! A secondary filter applies even while "show all" is on, so once it is
//! active the filtered array always wins.

use std::sync::Arc;

use horizon_tableview_core::PerfSpan;
use horizon_tableview_core::logging::{span_names, targets};

use super::filter::FilterValue;
use super::index::{Identifier, RowPath};
use super::item::ModelItem;
use super::section::Section;
use super::selection::{SelectionChange, SelectionSet};

/// Sections, selection and filter modes of a table view.
#[derive(Debug, Clone)]
pub struct ListViewState {
    all_sections: Vec<Section>,
    filtered_sections: Vec<Section>,
    selection: SelectionSet,
    all_selected: bool,
    secondary_filter_active: bool,
}

impl ListViewState {
    /// Creates the state for an initial set of sections.
    ///
    /// The filtered sections start as a copy of `sections`.
    pub fn new(sections: Vec<Section>, all_selected: bool) -> Self {
        Self {
            filtered_sections: sections.clone(),
            all_sections: sections,
            selection: SelectionSet::new(),
            all_selected,
            secondary_filter_active: false,
        }
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// The full, unfiltered sections.
    pub fn all_sections(&self) -> &[Section] {
        &self.all_sections
    }

    /// The filtered sections.
    pub fn filtered_sections(&self) -> &[Section] {
        &self.filtered_sections
    }

    /// Replaces both section arrays and clears the selection.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.filtered_sections = sections.clone();
        self.all_sections = sections;
        self.selection.clear();
        self.secondary_filter_active = false;
    }

    // =========================================================================
    // Mode flags
    // =========================================================================

    /// Whether "show all" mode is on.
    pub fn is_all_selected(&self) -> bool {
        self.all_selected
    }

    /// Sets "show all" mode without touching the section arrays.
    pub fn set_all_selected(&mut self, all_selected: bool) {
        self.all_selected = all_selected;
    }

    /// Whether a secondary filter is applied.
    pub fn is_secondary_filter_active(&self) -> bool {
        self.secondary_filter_active
    }

    /// Sets the secondary-filter flag without touching the section arrays.
    pub fn set_secondary_filter_active(&mut self, active: bool) {
        self.secondary_filter_active = active;
    }

    // =========================================================================
    // Backing-array resolution
    // =========================================================================

    /// Returns `true` when lookups read from the unfiltered sections.
    ///
    /// That is only the case in "show all" mode without a secondary filter.
    pub fn reads_all_sections(&self) -> bool {
        self.all_selected && !self.secondary_filter_active
    }

    /// Returns the items to display for `section`.
    ///
    /// Out-of-range sections resolve to an empty slice.
    pub fn items_for_section(&self, section: usize) -> &[Arc<dyn ModelItem>] {
        let sections = if self.reads_all_sections() {
            &self.all_sections
        } else {
            &self.filtered_sections
        };
        sections.get(section).map(Section::items).unwrap_or(&[])
    }

    /// Returns the item displayed at `path`, if any.
    pub fn item_at(&self, path: RowPath) -> Option<&Arc<dyn ModelItem>> {
        self.items_for_section(path.section).get(path.row)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selection set.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Toggles `identifier` in the selection set.
    pub fn toggle_selection(&mut self, identifier: Identifier) -> SelectionChange {
        self.selection.toggle(identifier)
    }

    /// Checks whether `identifier` is selected (by key).
    pub fn is_selected(&self, identifier: &Identifier) -> bool {
        self.selection.contains(identifier)
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps only the items whose primary value equals `value`.
    ///
    /// Leaves "show all" mode and drops any secondary filter. Every section
    /// is kept, possibly empty, so section indices stay aligned with the full
    /// array.
    pub fn filter_by_primary(&mut self, value: &FilterValue) {
        let _span = PerfSpan::new(span_names::FILTER);
        self.all_selected = false;
        self.secondary_filter_active = false;
        self.filtered_sections = self
            .all_sections
            .iter()
            .map(|section| section.retain_copy(|item| item.primary_filter_value() == *value))
            .collect();
        tracing::debug!(
            target: targets::FILTER,
            %value,
            rows = self.filtered_row_count(),
            "applied primary filter"
        );
    }

    /// Narrows the displayed items to those whose secondary value equals
    /// `value`.
    ///
    /// In "show all" mode the filter starts from the full sections, otherwise
    /// it narrows the current filtered sections further.
    pub fn filter_by_secondary(&mut self, value: &FilterValue) {
        let _span = PerfSpan::new(span_names::FILTER);
        let base = if self.all_selected {
            &self.all_sections
        } else {
            &self.filtered_sections
        };
        let narrowed: Vec<Section> = base
            .iter()
            .map(|section| section.retain_copy(|item| item.secondary_filter_value() == *value))
            .collect();
        self.filtered_sections = narrowed;
        self.secondary_filter_active = true;
        tracing::debug!(
            target: targets::FILTER,
            %value,
            all_selected = self.all_selected,
            rows = self.filtered_row_count(),
            "applied secondary filter"
        );
    }

    /// Enters "show all" mode and resets the filtered sections to the full
    /// data.
    pub fn show_all(&mut self) {
        self.all_selected = true;
        self.secondary_filter_active = false;
        self.filtered_sections = self.all_sections.clone();
        tracing::debug!(target: targets::FILTER, "showing all sections");
    }

    fn filtered_row_count(&self) -> usize {
        self.filtered_sections.iter().map(|s| s.items().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BasicItem, CellDescriptor, SectionLabelBuilder};

    fn item(title: &str, primary: &str, secondary: i64) -> Arc<dyn ModelItem> {
        Arc::new(
            BasicItem::new(title, CellDescriptor::new("Cell", 44.0))
                .with_primary(primary)
                .with_secondary(secondary),
        )
    }

    fn state(all_selected: bool) -> ListViewState {
        let first = SectionLabelBuilder::new("First", 14.0, 30.0).build(vec![
            item("a", "mobile", 1),
            item("b", "fixed", 2),
            item("c", "mobile", 2),
        ]);
        let second = SectionLabelBuilder::new("Second", 14.0, 30.0).build(vec![
            item("d", "fixed", 1),
            item("e", "mobile", 1),
            item("f", "fixed", 2),
        ]);
        ListViewState::new(vec![first, second], all_selected)
    }

    fn titles(state: &ListViewState, section: usize) -> Vec<String> {
        state.items_for_section(section).iter().map(|i| i.identity().key()).collect()
    }

    /// Replaces the filtered array with a marker so the resolver's source is observable.
    fn mark_filtered(state: &mut ListViewState) {
        state.filtered_sections = state
            .all_sections
            .iter()
            .map(|s| s.retain_copy(|item| item.key() == "a" || item.key() == "e"))
            .collect();
    }

    #[test]
    fn test_filtered_starts_as_copy() {
        let state = state(false);
        assert_eq!(state.filtered_sections().len(), 2);
        for (all, filtered) in state.all_sections().iter().zip(state.filtered_sections()) {
            assert_eq!(all.items().len(), filtered.items().len());
            assert!(Arc::ptr_eq(&all.items()[0], &filtered.items()[0]));
        }
    }

    #[test]
    fn test_resolver_not_all_selected_reads_filtered() {
        for secondary in [false, true] {
            let mut state = state(false);
            mark_filtered(&mut state);
            state.set_secondary_filter_active(secondary);

            assert!(!state.reads_all_sections());
            assert_eq!(titles(&state, 0), vec!["a"]);
            assert_eq!(titles(&state, 1), vec!["e"]);
        }
    }

    #[test]
    fn test_resolver_all_selected_with_secondary_reads_filtered() {
        let mut state = state(true);
        mark_filtered(&mut state);
        state.set_secondary_filter_active(true);

        assert!(!state.reads_all_sections());
        assert_eq!(titles(&state, 0), vec!["a"]);
    }

    #[test]
    fn test_resolver_all_selected_without_secondary_reads_all() {
        let mut state = state(true);
        mark_filtered(&mut state);

        assert!(state.reads_all_sections());
        assert_eq!(titles(&state, 0), vec!["a", "b", "c"]);
        assert_eq!(titles(&state, 1), vec!["d", "e", "f"]);
    }

    #[test]
    fn test_out_of_range_section_is_empty() {
        let state = state(true);
        assert!(state.items_for_section(7).is_empty());
        assert!(state.item_at(RowPath::new(0, 3)).is_none());
        assert!(state.item_at(RowPath::new(1, 2)).is_some());
    }

    #[test]
    fn test_filter_by_primary() {
        let mut state = state(true);
        state.set_secondary_filter_active(true);
        state.filter_by_primary(&FilterValue::from("mobile"));

        assert!(!state.is_all_selected());
        assert!(!state.is_secondary_filter_active());
        assert_eq!(titles(&state, 0), vec!["a", "c"]);
        assert_eq!(titles(&state, 1), vec!["e"]);
    }

    #[test]
    fn test_filter_by_primary_keeps_empty_sections() {
        let mut state = state(false);
        state.filter_by_primary(&FilterValue::from("none"));
        assert_eq!(state.filtered_sections().len(), 2);
        assert!(titles(&state, 0).is_empty());
        assert_eq!(state.filtered_sections()[1].label(), "Second");
    }

    #[test]
    fn test_filter_by_secondary_narrows_primary_result() {
        let mut state = state(false);
        state.filter_by_primary(&FilterValue::from("mobile"));
        state.filter_by_secondary(&FilterValue::from(2));

        assert!(state.is_secondary_filter_active());
        assert_eq!(titles(&state, 0), vec!["c"]);
        assert!(titles(&state, 1).is_empty());
    }

    #[test]
    fn test_filter_by_secondary_in_show_all_uses_full_data() {
        let mut state = state(false);
        state.filter_by_primary(&FilterValue::from("mobile"));
        state.show_all();
        state.filter_by_secondary(&FilterValue::from(1));

        // Secondary filter wins even though "show all" is on.
        assert!(state.is_all_selected());
        assert_eq!(titles(&state, 0), vec!["a"]);
        assert_eq!(titles(&state, 1), vec!["d", "e"]);
    }

    #[test]
    fn test_filter_values_of_other_variant_never_match() {
        let mut state = state(false);
        state.filter_by_secondary(&FilterValue::from("1"));
        assert!(titles(&state, 0).is_empty());
        assert!(titles(&state, 1).is_empty());
    }

    #[test]
    fn test_show_all_resets_filtered() {
        let mut state = state(false);
        state.filter_by_primary(&FilterValue::from("fixed"));
        state.show_all();

        assert!(state.reads_all_sections());
        assert_eq!(state.filtered_sections()[0].items().len(), 3);
    }

    #[test]
    fn test_selection_toggle() {
        let mut state = state(false);
        let id = Identifier::new("0", 0);

        assert_eq!(state.toggle_selection(id.clone()), SelectionChange::Inserted);
        assert!(state.is_selected(&id));
        assert_eq!(state.toggle_selection(id.clone()), SelectionChange::Removed);
        assert!(!state.is_selected(&id));
    }

    #[test]
    fn test_set_sections_clears_selection() {
        let mut state = state(false);
        state.toggle_selection(Identifier::new("1", 1));
        state.filter_by_secondary(&FilterValue::from(2));

        state.set_sections(vec![Section::unlabelled(vec![item("z", "x", 0)])]);
        assert!(state.selection().is_empty());
        assert!(!state.is_secondary_filter_active());
        assert_eq!(titles(&state, 0), vec!["z"]);
    }
}

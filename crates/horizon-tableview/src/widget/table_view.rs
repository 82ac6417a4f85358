//! The host-facing table view.
//!
//! [`TableView`] is driven by a host UI toolkit: the host asks how many
//! sections and rows there are, how tall they are and which cell to show, and
//! forwards row activations. The view answers from its [`ListViewState`] and
//! publishes what happened through signals.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_tableview::prelude::*;
//!
//! #[derive(Default)]
//! struct TitleCell;
//! impl Cell for TitleCell {}
//! impl CellType for TitleCell {
//!     fn create() -> Self { Self }
//! }
//!
//! let config = TableViewConfig::new();
//! let items: Vec<Arc<dyn ModelItem>> = vec![
//!     Arc::new(BasicItem::new("Alpha", CellDescriptor::of::<TitleCell>(44.0))),
//!     Arc::new(BasicItem::new("Beta", CellDescriptor::of::<TitleCell>(44.0))),
//! ];
//! let section = config.label_builder("Greek").build(items);
//!
//! let mut view = TableView::new(config, vec![section], [CellRegistration::of::<TitleCell>()]);
//! view.row_selected.connect(|item| println!("selected {}", item.key()));
//!
//! assert_eq!(view.number_of_sections(), 1);
//! assert_eq!(view.number_of_rows(0), 2);
//! assert!(!view.cell_for_row(RowPath::new(0, 1)).is_inert());
//! view.did_select_row(RowPath::new(0, 1));
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_tableview_core::logging::{span_names, targets};
use horizon_tableview_core::{PerfSpan, Signal};

use crate::config::TableViewConfig;
use crate::model::{
    CellHandle, CellRegistration, CellRegistry, FilterValue, Identifier, ListViewState, ModelItem,
    RowPath, Section, SectionHeader, SelectionChange, SelectionSet,
};

/// The cell produced for a row.
#[derive(Clone)]
pub enum RowCell {
    /// A cell from the registry, configured for the row's item.
    Configured(CellHandle),
    /// An empty placeholder, used when the row has no item or its cell type
    /// is not registered.
    Inert,
}

impl RowCell {
    /// The cell handle, or `None` for an inert row.
    pub fn handle(&self) -> Option<&CellHandle> {
        match self {
            Self::Configured(cell) => Some(cell),
            Self::Inert => None,
        }
    }

    /// Returns `true` for the placeholder row.
    pub fn is_inert(&self) -> bool {
        matches!(self, Self::Inert)
    }
}

impl fmt::Debug for RowCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured(_) => f.write_str("RowCell::Configured(..)"),
            Self::Inert => f.write_str("RowCell::Inert"),
        }
    }
}

/// A sectioned list view with selection tracking and filtering.
///
/// # Signals
///
/// - `row_will_display((item, cell))`: a cell is about to be shown for an item
/// - `row_selected(item)`: a row was activated
/// - `reload_requested(())`: the host should reload all rows
/// - `row_reload_requested(path)`: the host should reload one row
/// - `deselect_requested(path)`: the host should clear its own highlight
pub struct TableView {
    state: ListViewState,
    registry: CellRegistry,
    config: TableViewConfig,

    /// Emitted before a configured cell is handed to the host.
    pub row_will_display: Signal<(Arc<dyn ModelItem>, CellHandle)>,
    /// Emitted after a row activation toggled the item's selection.
    pub row_selected: Signal<Arc<dyn ModelItem>>,
    /// Emitted whenever selection or filtering changes what is displayed.
    pub reload_requested: Signal<()>,
    /// Emitted to re-render a single activated row.
    pub row_reload_requested: Signal<RowPath>,
    /// Emitted to clear the host's highlight on an activated row.
    pub deselect_requested: Signal<RowPath>,
}

impl TableView {
    /// Creates a table view over `sections` with an explicit list of cell
    /// registrations.
    pub fn new(
        config: TableViewConfig,
        sections: Vec<Section>,
        registrations: impl IntoIterator<Item = CellRegistration>,
    ) -> Self {
        let registry = CellRegistry::with_registrations(registrations);
        tracing::debug!(
            target: targets::VIEW,
            sections = sections.len(),
            registry = ?registry,
            "created table view"
        );
        Self {
            state: ListViewState::new(sections, config.all_selected),
            registry,
            config,
            row_will_display: Signal::new(),
            row_selected: Signal::new(),
            reload_requested: Signal::new(),
            row_reload_requested: Signal::new(),
            deselect_requested: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The view configuration.
    pub fn config(&self) -> &TableViewConfig {
        &self.config
    }

    /// The selection, filter and section state.
    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionSet {
        self.state.selection()
    }

    /// The cell registry.
    pub fn registry(&self) -> &CellRegistry {
        &self.registry
    }

    /// Mutable access to the cell registry, for late registrations.
    pub fn registry_mut(&mut self) -> &mut CellRegistry {
        &mut self.registry
    }

    /// Turns selection visuals on or off for subsequently rendered rows.
    pub fn set_show_selection(&mut self, show: bool) {
        self.config.show_selection = show;
    }

    /// The item displayed at `path`, if any.
    pub fn item_at(&self, path: RowPath) -> Option<&Arc<dyn ModelItem>> {
        self.state.item_at(path)
    }

    // =========================================================================
    // Host queries
    // =========================================================================

    /// Number of sections reported to the host; never less than one.
    pub fn number_of_sections(&self) -> usize {
        self.state.all_sections().len().max(1)
    }

    /// Number of rows in `section`.
    pub fn number_of_rows(&self, section: usize) -> usize {
        self.state.items_for_section(section).len()
    }

    /// Header descriptor for `section`.
    ///
    /// Headers are only shown when the view has more than one section and
    /// the section is labelled. The returned height includes the configured
    /// top padding and matches [`header_height`](Self::header_height).
    pub fn header_for_section(&self, section: usize) -> Option<SectionHeader> {
        let mut header = self.header_section(section).and_then(Section::header)?;
        header.height += self.config.section_header_top_padding;
        Some(header)
    }

    /// Header height for `section`, 0 when no header is shown.
    pub fn header_height(&self, section: usize) -> f32 {
        self.header_for_section(section).map_or(0.0, |h| h.height)
    }

    /// Footers are never shown.
    pub fn footer_for_section(&self, _section: usize) -> Option<SectionHeader> {
        None
    }

    /// Footers are never shown.
    pub fn footer_height(&self, _section: usize) -> f32 {
        0.0
    }

    /// Row height from the item's cell descriptor, 0 for a missing row.
    pub fn row_height(&self, path: RowPath) -> f32 {
        self.state
            .item_at(path)
            .map_or(0.0, |item| item.cell_descriptor().height())
    }

    /// Row height estimate for the host, `None` when estimation is off.
    pub fn estimated_row_height(&self) -> Option<f32> {
        (self.config.estimated_row_height > 0.0).then_some(self.config.estimated_row_height)
    }

    /// Produces the cell for the row at `path`.
    ///
    /// Selectable cells get the item's identifier re-derived from the row
    /// index and their selection state configured.
    #[tracing::instrument(skip(self), target = "horizon_tableview::view", level = "trace")]
    pub fn cell_for_row(&mut self, path: RowPath) -> RowCell {
        let _span = PerfSpan::new(span_names::HOST_QUERY);

        let Some(item) = self.state.item_at(path).cloned() else {
            tracing::debug!(target: targets::VIEW, %path, "no item for row");
            return RowCell::Inert;
        };

        let reuse_identifier = item.cell_descriptor().reuse_identifier();
        let Some(cell) = self.registry.dequeue(reuse_identifier) else {
            tracing::warn!(
                target: targets::VIEW,
                %path,
                reuse_identifier,
                "cell type not registered, returning inert row"
            );
            return RowCell::Inert;
        };

        self.row_will_display.emit((Arc::clone(&item), Arc::clone(&cell)));

        {
            let mut guard = cell.lock();
            if let Some(selectable) = guard.as_selectable_mut() {
                let identifier = item.bind_row(path.row);
                selectable.configure_for_selection(
                    self.state.selection(),
                    identifier,
                    self.config.show_selection,
                );
                selectable.set_user_interaction_enabled(true);
            }
        }

        RowCell::Configured(cell)
    }

    /// Handles a row activation from the host.
    ///
    /// Toggles the row item's selection, then emits `row_selected`,
    /// `deselect_requested` and `row_reload_requested`. Activations on
    /// missing rows are ignored.
    #[tracing::instrument(skip(self), target = "horizon_tableview::view", level = "trace")]
    pub fn did_select_row(&mut self, path: RowPath) {
        let Some(item) = self.state.item_at(path).cloned() else {
            tracing::debug!(target: targets::VIEW, %path, "activation on missing row ignored");
            return;
        };

        let identifier = Identifier::new(item.key(), path.row);
        let change = self.toggle_selection(identifier);
        tracing::debug!(target: targets::VIEW, %path, ?change, "row activated");

        self.row_selected.emit(item);
        self.deselect_requested.emit(path);
        self.row_reload_requested.emit(path);
    }

    /// Returns a cell the host no longer displays to the reuse pool.
    pub fn recycle_cell(&mut self, reuse_identifier: &str, cell: CellHandle) {
        self.registry.recycle(reuse_identifier, cell);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Toggles `identifier` in the selection and requests a reload.
    pub fn toggle_selection(&mut self, identifier: Identifier) -> SelectionChange {
        let change = self.state.toggle_selection(identifier);
        self.reload_requested.emit(());
        change
    }

    /// Checks whether `identifier` is selected.
    pub fn is_selected(&self, identifier: &Identifier) -> bool {
        self.state.is_selected(identifier)
    }

    /// Deselects everything and requests a reload.
    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
        self.reload_requested.emit(());
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Shows only items whose primary value equals `value`.
    pub fn filter_by_primary(&mut self, value: &FilterValue) {
        self.state.filter_by_primary(value);
        self.reload_requested.emit(());
    }

    /// Narrows the displayed items by secondary value.
    pub fn filter_by_secondary(&mut self, value: &FilterValue) {
        self.state.filter_by_secondary(value);
        self.reload_requested.emit(());
    }

    /// Shows every item.
    pub fn show_all(&mut self) {
        self.state.show_all();
        self.reload_requested.emit(());
    }

    /// Replaces the sections and clears the selection.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        tracing::debug!(target: targets::VIEW, sections = sections.len(), "replacing sections");
        self.state.set_sections(sections);
        self.reload_requested.emit(());
    }

    /// Runs several updates with a single `reload_requested` at the end.
    ///
    /// Reloads requested inside `updates` are suppressed. Nested batches
    /// leave the reload to the outermost one.
    pub fn perform_batch_updates<R>(&mut self, updates: impl FnOnce(&mut Self) -> R) -> R {
        let outermost = !self.reload_requested.is_blocked();
        self.reload_requested.set_blocked(true);
        let result = updates(self);
        if outermost {
            self.reload_requested.set_blocked(false);
            tracing::debug!(target: targets::VIEW, "batch update finished");
            self.reload_requested.emit(());
        }
        result
    }

    fn header_section(&self, section: usize) -> Option<&Section> {
        let sections = self.state.all_sections();
        if sections.len() <= 1 {
            return None;
        }
        sections.get(section).filter(|s| s.has_label())
    }
}

impl fmt::Debug for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("state", &self.state)
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(TableView: Send, Sync);

//! Prelude module for Horizon TableView.
//!
//! ```
//! use horizon_tableview::prelude::*;
//! ```

// ============================================================================
// View
// ============================================================================

pub use crate::config::TableViewConfig;
pub use crate::widget::{RowCell, TableView};

// ============================================================================
// Signals
// ============================================================================

pub use horizon_tableview_core::{ConnectionId, Signal};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    BasicItem, Cell, CellDescriptor, CellHandle, CellRegistration, CellType, FilterValue,
    Identifier, ItemIdentity, ModelItem, RowPath, Section, SectionLabelBuilder, SelectableCell,
    SelectionSet,
};

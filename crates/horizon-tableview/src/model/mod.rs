//! Model types for the table view.
//!
//! This module provides the data side of the component, independent of any
//! host toolkit:
//!
//! - `Identifier` / `RowPath`: how rows and selected items are addressed
//! - `FilterValue`: the closed set of values items are filtered by
//! - `ModelItem`: the capability trait for row data
//! - `Section`: a labelled group of items
//! - `Cell` / `SelectableCell` / `CellType`: capability traits for row cells
//! - `CellRegistry`: explicit cell registration and reuse
//! - `SelectionSet`: which items are selected
//! - `ListViewState`: full and filtered sections, selection and mode flags
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐   items_for_section   ┌───────────────┐
//! │ ListViewState│──────────────────────>│   TableView   │──> host toolkit
//! │  all / filt. │<──────────────────────│ (host queries)│<── row events
//! │  selection   │   toggle_selection    └───────────────┘
//! └──────────────┘                               │
//!                                                v
//!                                        ┌───────────────┐
//!                                        │ CellRegistry  │
//!                                        └───────────────┘
//! ```

mod cell;
mod filter;
mod index;
mod item;
mod registry;
mod section;
mod selection;
mod state;

pub use cell::{Cell, CellDescriptor, CellHandle, CellType, SelectableCell};
pub use filter::FilterValue;
pub use index::{Identifier, RowPath};
pub use item::{BasicItem, ItemIdentity, ModelItem};
pub use registry::{CellFactory, CellRegistration, CellRegistry};
pub use section::{
    DEFAULT_LABEL_FONT_SIZE, DEFAULT_SECTION_HEIGHT, Section, SectionFont, SectionHeader,
    SectionLabelBuilder,
};
pub use selection::{SelectionChange, SelectionSet};
pub use state::ListViewState;

//! Horizon TableView - a sectioned, selectable, filterable table view for
//! host UI toolkits.
//!
//! The crate holds everything except the drawing: model items grouped into
//! labelled sections, explicit cell registration and reuse, a selection set,
//! and primary/secondary filtering over a full and a filtered copy of the
//! data. A host toolkit drives a [`TableView`] through its query methods and
//! listens to its signals.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_tableview::prelude::*;
//!
//! #[derive(Default)]
//! struct PlanCell;
//! impl Cell for PlanCell {}
//! impl CellType for PlanCell {
//!     fn create() -> Self { Self }
//! }
//!
//! let plan = |name: &str, kind: &str| -> Arc<dyn ModelItem> {
//!     Arc::new(BasicItem::new(name, CellDescriptor::of::<PlanCell>(60.0)).with_primary(kind))
//! };
//!
//! let config = TableViewConfig::new().with_all_selected(true);
//! let sections = vec![
//!     config.label_builder("Home").build(vec![plan("Fiber", "fixed"), plan("DSL", "fixed")]),
//!     config.label_builder("Phone").build(vec![plan("Unlimited", "mobile")]),
//! ];
//! let mut view = TableView::new(config, sections, [CellRegistration::of::<PlanCell>()]);
//!
//! assert_eq!(view.number_of_sections(), 2);
//! view.filter_by_primary(&FilterValue::from("mobile"));
//! assert_eq!(view.number_of_rows(0), 0);
//! assert_eq!(view.number_of_rows(1), 1);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use config::TableViewConfig;
pub use error::{Error, Result};
pub use horizon_tableview_core::*;
pub use widget::{RowCell, TableView};

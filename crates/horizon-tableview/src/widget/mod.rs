//! The host-facing view layer.
//!
//! Rendering belongs to the host toolkit. This module only answers the
//! host's queries and reports row events through signals.

mod table_view;

pub use table_view::{RowCell, TableView};

//! Cell capability traits.
//!
//! Cells are the per-row objects a host toolkit renders. The table view only
//! needs a few capabilities from them, split into independent traits so a
//! concrete cell opts into exactly what it supports:
//!
//! - [`Cell`]: anything that can occupy a row
//! - [`SelectableCell`]: a cell that can show a selected ("tapped") state
//! - [`CellType`]: a cell type that can be registered and constructed by the
//!   [`CellRegistry`](super::CellRegistry)
//!
//! # Example
//!
//! ```
//! use horizon_tableview::model::{Cell, CellType, Identifier, SelectableCell};
//!
//! #[derive(Default)]
//! struct CheckmarkCell {
//!     tapped: bool,
//!     identifier: Option<Identifier>,
//! }
//!
//! impl Cell for CheckmarkCell {
//!     fn as_selectable_mut(&mut self) -> Option<&mut dyn SelectableCell> {
//!         Some(self)
//!     }
//! }
//!
//! impl SelectableCell for CheckmarkCell {
//!     fn is_tapped(&self) -> bool { self.tapped }
//!     fn set_tapped(&mut self, tapped: bool) { self.tapped = tapped; }
//!     fn identifier(&self) -> Option<&Identifier> { self.identifier.as_ref() }
//!     fn set_identifier(&mut self, identifier: Identifier) { self.identifier = Some(identifier); }
//! }
//!
//! impl CellType for CheckmarkCell {
//!     fn create() -> Self { Self::default() }
//! }
//!
//! assert_eq!(CheckmarkCell::reuse_identifier(), "CheckmarkCell");
//! ```

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;

use super::index::Identifier;
use super::selection::SelectionSet;

/// A shared, lockable cell instance handed to hosts and subscribers.
pub type CellHandle = Arc<Mutex<Box<dyn Cell>>>;

/// A cell that can be displayed in a table view row.
pub trait Cell: Any + Send + Sync {
    /// Returns the selectable capability of this cell, if it has one.
    ///
    /// Cells that implement [`SelectableCell`] override this to return
    /// `Some(self)`.
    fn as_selectable_mut(&mut self) -> Option<&mut dyn SelectableCell> {
        None
    }

    /// Called when a recycled cell is handed out again.
    fn prepare_for_reuse(&mut self) {}
}

impl dyn Cell {
    /// Downcasts to a concrete cell type.
    pub fn downcast_ref<T: Cell>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Mutably downcasts to a concrete cell type.
    pub fn downcast_mut<T: Cell>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}

/// A cell that can display a selected ("tapped") state.
pub trait SelectableCell: Cell {
    /// Whether the cell currently shows its selected visual.
    fn is_tapped(&self) -> bool;

    /// Sets the selected visual.
    fn set_tapped(&mut self, tapped: bool);

    /// The identifier of the item this cell was last configured for.
    fn identifier(&self) -> Option<&Identifier>;

    /// Assigns the identifier of the item being displayed.
    fn set_identifier(&mut self, identifier: Identifier);

    /// Enables or disables user interaction on the cell.
    fn set_user_interaction_enabled(&mut self, _enabled: bool) {}

    /// Configures the cell's selection state for the item it displays.
    ///
    /// The identifier is always assigned. The tapped flag is only written
    /// when `show_selection` is `true`; otherwise it keeps whatever value it
    /// had, including a value left over from a previous reuse.
    fn configure_for_selection(
        &mut self,
        selection: &SelectionSet,
        identifier: Identifier,
        show_selection: bool,
    ) {
        let tapped = selection.contains(&identifier);
        self.set_identifier(identifier);
        if show_selection {
            self.set_tapped(tapped);
        }
    }
}

/// A cell type that can be registered for reuse and constructed on demand.
pub trait CellType: Cell + Sized {
    /// Creates a fresh cell.
    fn create() -> Self;

    /// The reuse identifier cells of this type are registered under.
    ///
    /// Defaults to the unqualified type name.
    fn reuse_identifier() -> String {
        short_type_name::<Self>().to_string()
    }
}

/// Describes which cell type renders an item, and how tall its row is.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDescriptor {
    reuse_identifier: String,
    height: f32,
}

impl CellDescriptor {
    /// Creates a descriptor for an explicit reuse identifier.
    pub fn new(reuse_identifier: impl Into<String>, height: f32) -> Self {
        Self {
            reuse_identifier: reuse_identifier.into(),
            height,
        }
    }

    /// Creates a descriptor for a registered cell type.
    pub fn of<C: CellType>(height: f32) -> Self {
        Self::new(C::reuse_identifier(), height)
    }

    /// The reuse identifier of the cell type.
    pub fn reuse_identifier(&self) -> &str {
        &self.reuse_identifier
    }

    /// The row height.
    pub fn height(&self) -> f32 {
        self.height
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

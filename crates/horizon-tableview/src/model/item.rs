//! Model items displayed by table view rows.
//!
//! A model item is any type implementing [`ModelItem`]. Items are shared
//! between the full and the filtered section arrays through `Arc`, so the
//! per-render row binding lives in an embedded [`ItemIdentity`] with interior
//! mutability.

use std::fmt;

use parking_lot::RwLock;

use super::cell::CellDescriptor;
use super::filter::FilterValue;
use super::index::Identifier;

/// The row binding of an item: its key and the identifier derived from it.
///
/// The binding is re-derived every time the item's row is rendered; a row
/// index can differ between the full and the filtered arrays.
#[derive(Default)]
pub struct ItemIdentity {
    binding: RwLock<Identifier>,
}

impl ItemIdentity {
    /// Creates an identity with an initial key and position.
    pub fn new(key: impl Into<String>, position: usize) -> Self {
        Self {
            binding: RwLock::new(Identifier::new(key, position)),
        }
    }

    /// The current key.
    pub fn key(&self) -> String {
        self.binding.read().key().to_string()
    }

    /// The current identifier.
    pub fn identifier(&self) -> Identifier {
        self.binding.read().clone()
    }

    /// Replaces the binding.
    pub fn set(&self, identifier: Identifier) {
        *self.binding.write() = identifier;
    }
}

impl fmt::Debug for ItemIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemIdentity").field(&*self.binding.read()).finish()
    }
}

/// The data object displayed by one row.
///
/// # Example
///
/// ```
/// use horizon_tableview::model::{CellDescriptor, FilterValue, ItemIdentity, ModelItem};
///
/// struct Invoice {
///     status: String,
///     year: i64,
///     cell: CellDescriptor,
///     identity: ItemIdentity,
/// }
///
/// impl ModelItem for Invoice {
///     fn cell_descriptor(&self) -> &CellDescriptor { &self.cell }
///     fn primary_filter_value(&self) -> FilterValue { self.status.as_str().into() }
///     fn secondary_filter_value(&self) -> FilterValue { self.year.into() }
///     fn identity(&self) -> &ItemIdentity { &self.identity }
/// }
/// ```
pub trait ModelItem: Send + Sync {
    /// The cell type and row height used to display this item.
    fn cell_descriptor(&self) -> &CellDescriptor;

    /// The value matched by primary filtering.
    fn primary_filter_value(&self) -> FilterValue;

    /// The value matched by secondary filtering.
    fn secondary_filter_value(&self) -> FilterValue;

    /// The embedded row binding.
    fn identity(&self) -> &ItemIdentity;

    /// The item's current key.
    fn key(&self) -> String {
        self.identity().key()
    }

    /// The item's current identifier.
    fn identifier(&self) -> Identifier {
        self.identity().identifier()
    }

    /// Re-derives the key and identifier from the row being rendered.
    ///
    /// The key becomes the decimal row index and the identifier pairs that
    /// key with the row.
    fn bind_row(&self, row: usize) -> Identifier {
        let identifier = Identifier::new(row.to_string(), row);
        self.identity().set(identifier.clone());
        identifier
    }
}

/// A ready-made [`ModelItem`] holding its values directly.
#[derive(Debug)]
pub struct BasicItem {
    title: String,
    primary: FilterValue,
    secondary: FilterValue,
    cell: CellDescriptor,
    identity: ItemIdentity,
}

impl BasicItem {
    /// Creates an item displayed by the given cell.
    ///
    /// Both filter values start as the title text.
    pub fn new(title: impl Into<String>, cell: CellDescriptor) -> Self {
        let title = title.into();
        Self {
            primary: FilterValue::Text(title.clone()),
            secondary: FilterValue::Text(title.clone()),
            identity: ItemIdentity::new(title.clone(), 0),
            title,
            cell,
        }
    }

    /// Sets the primary filter value using builder pattern.
    pub fn with_primary(mut self, value: impl Into<FilterValue>) -> Self {
        self.primary = value.into();
        self
    }

    /// Sets the secondary filter value using builder pattern.
    pub fn with_secondary(mut self, value: impl Into<FilterValue>) -> Self {
        self.secondary = value.into();
        self
    }

    /// The item title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl ModelItem for BasicItem {
    fn cell_descriptor(&self) -> &CellDescriptor {
        &self.cell
    }

    fn primary_filter_value(&self) -> FilterValue {
        self.primary.clone()
    }

    fn secondary_filter_value(&self) -> FilterValue {
        self.secondary.clone()
    }

    fn identity(&self) -> &ItemIdentity {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> BasicItem {
        BasicItem::new("Fiber 100", CellDescriptor::new("PlanCell", 60.0))
            .with_primary("internet")
            .with_secondary(2024)
    }

    #[test]
    fn test_basic_item_values() {
        let item = item();
        assert_eq!(item.title(), "Fiber 100");
        assert_eq!(item.primary_filter_value(), FilterValue::from("internet"));
        assert_eq!(item.secondary_filter_value(), FilterValue::Number(2024));
        assert_eq!(item.cell_descriptor().height(), 60.0);
        assert_eq!(item.key(), "Fiber 100");
    }

    #[test]
    fn test_bind_row_rederives_key_and_identifier() {
        let item = item();

        let id = item.bind_row(4);
        assert_eq!(id.key(), "4");
        assert_eq!(item.key(), "4");
        assert_eq!(item.identifier().position(), 4);

        // A later render at another row overwrites the binding.
        item.bind_row(1);
        assert_eq!(item.key(), "1");
        assert_eq!(item.identifier().position(), 1);
    }
}

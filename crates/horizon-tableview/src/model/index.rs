//! Row addressing types.
//!
//! [`RowPath`] addresses a row by section and row number, the way host
//! toolkits ask for rows. [`Identifier`] pairs an item's logical key with the
//! row it was last rendered or selected at; it is what the selection set
//! stores.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The position of a row inside a sectioned table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowPath {
    /// The section index.
    pub section: usize,
    /// The row index within the section.
    pub row: usize,
}

impl RowPath {
    /// Creates a new row path.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for RowPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

/// Identifies an item for selection purposes.
///
/// An identifier carries the item's key and the row position it was derived
/// at. Equality and hashing consider the key only: the same item may sit at a
/// different row after a reload or filter change and must still be
/// recognised as selected.
///
/// # Example
///
/// ```
/// use horizon_tableview::model::Identifier;
///
/// let rendered = Identifier::new("7", 7);
/// let moved = Identifier::new("7", 2);
/// assert_eq!(rendered, moved);
/// ```
#[derive(Debug, Clone, Eq, Default)]
pub struct Identifier {
    key: String,
    position: usize,
}

impl Identifier {
    /// Creates an identifier from a key and a row position.
    pub fn new(key: impl Into<String>, position: usize) -> Self {
        Self {
            key: key.into(),
            position,
        }
    }

    /// Returns the logical key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the row position this identifier was derived at.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.key, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_equality_ignores_position() {
        let a = Identifier::new("alpha", 0);
        let b = Identifier::new("alpha", 5);
        let c = Identifier::new("beta", 0);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_identifier_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Identifier::new("alpha", 0));
        assert!(set.contains(&Identifier::new("alpha", 9)));
        assert!(!set.insert(Identifier::new("alpha", 3)));
    }

    #[test]
    fn test_identifier_accessors() {
        let id = Identifier::new("12", 12);
        assert_eq!(id.key(), "12");
        assert_eq!(id.position(), 12);
        assert_eq!(id.to_string(), "12@12");
    }

    #[test]
    fn test_row_path_display() {
        assert_eq!(RowPath::new(1, 4).to_string(), "[1, 4]");
        assert_eq!(RowPath::default(), RowPath::new(0, 0));
    }
}

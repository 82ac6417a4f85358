//! Filter key values.
//!
//! Every model item exposes a primary and a secondary [`FilterValue`]. The
//! filtering operations on
//! [`ListViewState`](super::ListViewState) keep the items whose value equals
//! the requested one.

use std::fmt;

/// A value an item can be filtered by.
///
/// `FilterValue` is a closed set of variants. Comparison is total: values of
/// different variants are simply unequal, so `Text("1")` never matches
/// `Number(1)`. No ordering is defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterValue {
    /// Text key.
    Text(String),
    /// Numeric key.
    Number(i64),
}

impl FilterValue {
    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s.as_str()),
            FilterValue::Number(_) => None,
        }
    }

    /// Returns the number if this is a `Number` value.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            FilterValue::Text(_) => None,
        }
    }

    /// Returns `true` if both values are of the same variant and equal.
    #[inline]
    pub fn matches(&self, other: &FilterValue) -> bool {
        self == other
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Number(i64::from(n))
    }
}

impl From<u32> for FilterValue {
    fn from(n: u32) -> Self {
        FilterValue::Number(i64::from(n))
    }
}

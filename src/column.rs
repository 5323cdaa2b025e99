//! Specialized type for the column of values provided to this library,
//! and the column of normalized values it returns.

use derivative::Derivative;
use derive_more::{Deref, Index};
use tap::Pipe;

/// An ordered sequence of text values, any of which may be missing.
///
/// Position is row identity: it is shared with sibling columns of the same table,
/// so normalization never reorders, drops, or inserts values.
///
/// # Example
///
/// ```
/// # use textclean::Column;
/// let column = Column::from_iter([Some("a"), None, Some("")]);
///
/// assert_eq!(column.len(), 3);
/// assert_eq!(column.missing_count(), 1);
/// assert_eq!(column[1], None);
/// assert_eq!(column[2].as_deref(), Some(""));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Derivative, Index, Deref)]
#[derivative(Debug = "transparent")]
pub struct Column(Vec<Option<String>>);

impl Column {
    /// Create a new instance with the provided values.
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self(values)
    }

    /// View the values as a plain slice.
    pub fn as_slice(&self) -> &[Option<String>] {
        &self.0
    }

    /// Consume the column, returning the underlying values.
    pub fn into_inner(self) -> Vec<Option<String>> {
        self.0
    }

    /// The number of values that are missing.
    pub fn missing_count(&self) -> usize {
        self.0.iter().filter(|value| value.is_none()).count()
    }
}

impl From<Vec<Option<String>>> for Column {
    fn from(values: Vec<Option<String>>) -> Self {
        Self::new(values)
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for Column {
    fn from_iter<T: IntoIterator<Item = Option<S>>>(iter: T) -> Self {
        iter.into_iter()
            .map(|value| value.map(Into::into))
            .collect::<Vec<_>>()
            .pipe(Self)
    }
}

impl IntoIterator for Column {
    type Item = Option<String>;
    type IntoIter = std::vec::IntoIter<Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Option<String>;
    type IntoIter = std::slice::Iter<'a, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

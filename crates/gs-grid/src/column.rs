//! Column descriptors and the column model.
//!
//! A [`ColumnDescriptor`] says how a column is labeled, how its cell value is
//! read from a record, and whether it takes part in sorting and filtering. The
//! [`ColumnModel`] is the ordered list shared by the header, the body, and the
//! query engine.
//!
//! Only [`Accessor::Field`] columns can be sorted or filtered. A derived column
//! flagged sortable or filterable keeps the flag for display purposes but the
//! engine ignores it, and [`ColumnModel::new`] logs a warning.

use std::fmt;

use gs_core::{FieldValue, Record};
use tracing::warn;

/// Function that computes a display value from a whole record.
pub type DeriveFn<R> = fn(&R) -> String;

/// How a column reads its value from a record.
pub enum Accessor<R> {
    /// Reads the record field with this key.
    Field(String),
    /// Computes display text from the record. Display only.
    Derived(DeriveFn<R>),
}

impl<R> Accessor<R> {
    /// Returns the field key for [`Accessor::Field`].
    #[must_use]
    pub fn field_key(&self) -> Option<&str> {
        match self {
            Self::Field(key) => Some(key),
            Self::Derived(_) => None,
        }
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(key) => Self::Field(key.clone()),
            Self::Derived(f) => Self::Derived(*f),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(key) => f.debug_tuple("Field").field(key).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Declarative description of one grid column.
///
/// # Examples
///
/// ```
/// use gs_core::JsonRecord;
/// use gs_grid::ColumnDescriptor;
///
/// let column = ColumnDescriptor::<JsonRecord>::field("severity", "Severity")
///     .sortable()
///     .filterable()
///     .width(12);
///
/// assert_eq!(column.field_key(), Some("severity"));
/// assert!(column.is_sortable());
/// assert!(column.is_filterable());
/// ```
pub struct ColumnDescriptor<R> {
    header: String,
    accessor: Accessor<R>,
    width: Option<u16>,
    sortable: bool,
    filterable: bool,
}

impl<R> ColumnDescriptor<R> {
    /// Creates a column that reads the field `key`.
    #[must_use]
    pub fn field(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Field(key.into()),
            width: None,
            sortable: false,
            filterable: false,
        }
    }

    /// Creates a display-only column computed by `derive`.
    #[must_use]
    pub fn derived(header: impl Into<String>, derive: DeriveFn<R>) -> Self {
        Self {
            header: header.into(),
            accessor: Accessor::Derived(derive),
            width: None,
            sortable: false,
            filterable: false,
        }
    }

    /// Marks the column sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column filterable.
    #[must_use]
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Sets the display width hint in terminal cells.
    #[must_use]
    pub const fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Returns the header label.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the accessor.
    #[must_use]
    pub const fn accessor(&self) -> &Accessor<R> {
        &self.accessor
    }

    /// Returns the width hint, if any.
    #[must_use]
    pub const fn width_hint(&self) -> Option<u16> {
        self.width
    }

    /// Returns the field key, or `None` for derived columns.
    #[must_use]
    pub fn field_key(&self) -> Option<&str> {
        self.accessor.field_key()
    }

    /// Whether the column was declared sortable, regardless of accessor.
    #[must_use]
    pub const fn declared_sortable(&self) -> bool {
        self.sortable
    }

    /// Whether the column was declared filterable, regardless of accessor.
    #[must_use]
    pub const fn declared_filterable(&self) -> bool {
        self.filterable
    }

    /// Whether the engine sorts by this column.
    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        self.sortable && matches!(self.accessor, Accessor::Field(_))
    }

    /// Whether the engine filters by this column.
    #[must_use]
    pub const fn is_filterable(&self) -> bool {
        self.filterable && matches!(self.accessor, Accessor::Field(_))
    }
}

impl<R: Record> ColumnDescriptor<R> {
    /// Reads the raw field value. Derived columns yield their text.
    #[must_use]
    pub fn value(&self, record: &R) -> FieldValue {
        match &self.accessor {
            Accessor::Field(key) => record.field(key),
            Accessor::Derived(derive) => FieldValue::Text(derive(record)),
        }
    }

    /// Renders the cell text: the stringified field, or `""` for null.
    #[must_use]
    pub fn cell_text(&self, record: &R) -> String {
        match &self.accessor {
            Accessor::Field(key) => record.field(key).as_text().into_owned(),
            Accessor::Derived(derive) => derive(record),
        }
    }
}

impl<R> Clone for ColumnDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            width: self.width,
            sortable: self.sortable,
            filterable: self.filterable,
        }
    }
}

impl<R> fmt::Debug for ColumnDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .finish()
    }
}

/// The ordered columns of a grid.
pub struct ColumnModel<R> {
    columns: Vec<ColumnDescriptor<R>>,
}

impl<R> ColumnModel<R> {
    /// Builds a model, warning about flags the engine will ignore.
    #[must_use]
    pub fn new(columns: Vec<ColumnDescriptor<R>>) -> Self {
        for column in &columns {
            if column.field_key().is_none()
                && (column.declared_sortable() || column.declared_filterable())
            {
                warn!(
                    header = %column.header,
                    sortable = column.declared_sortable(),
                    filterable = column.declared_filterable(),
                    "Derived column cannot be sorted or filtered; flags ignored"
                );
            }
        }
        Self { columns }
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ColumnDescriptor<R>> {
        self.columns.get(index)
    }

    /// Iterates over the columns in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor<R>> {
        self.columns.iter()
    }

    /// Finds the field column reading `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&ColumnDescriptor<R>> {
        self.columns.iter().find(|c| c.field_key() == Some(key))
    }

    /// Finds the sortable column reading `key`.
    #[must_use]
    pub fn sortable(&self, key: &str) -> Option<&ColumnDescriptor<R>> {
        self.find(key).filter(|c| c.is_sortable())
    }

    /// Iterates over the columns the engine filters by.
    pub fn filterable(&self) -> impl Iterator<Item = &ColumnDescriptor<R>> {
        self.columns.iter().filter(|c| c.is_filterable())
    }
}

impl<'a, R> IntoIterator for &'a ColumnModel<R> {
    type Item = &'a ColumnDescriptor<R>;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl<R> FromIterator<ColumnDescriptor<R>> for ColumnModel<R> {
    fn from_iter<I: IntoIterator<Item = ColumnDescriptor<R>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> fmt::Debug for ColumnModel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}

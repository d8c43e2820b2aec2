//! Result rows and row mapping.

use crate::convert;
use crate::error::{OrmError, OrmResult};
use chrono::NaiveDateTime;
use std::sync::Arc;

/// One result row: column names in result order with each value as raw text.
///
/// `None` is SQL NULL. Column names are shared by every row of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Option<String>>,
}

impl Row {
    /// Create a row. `values` must line up with `columns`.
    pub fn new(columns: Arc<[String]>, values: Vec<Option<String>>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// The text value of a column; `None` if the column is absent or NULL.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.index_of(column)
            .and_then(|i| self.values.get(i))
            .and_then(|v| v.as_deref())
    }

    /// Like [`Row::get`], but an absent column is an [`OrmError::NotFound`].
    pub fn try_get(&self, column: &str) -> OrmResult<Option<&str>> {
        let i = self
            .index_of(column)
            .ok_or_else(|| OrmError::not_found(format!("column '{column}' not in row")))?;
        Ok(self.values.get(i).and_then(|v| v.as_deref()))
    }

    /// The value of a column that must be present and non-NULL.
    pub fn require(&self, column: &str) -> OrmResult<&str> {
        self.try_get(column)?
            .ok_or_else(|| OrmError::decode(column, "unexpected NULL"))
    }

    pub fn is_null(&self, column: &str) -> bool {
        self.index_of(column)
            .is_some_and(|i| self.values.get(i).is_some_and(Option::is_none))
    }

    /// Parse a `DATETIME(3)` column.
    pub fn get_datetime(&self, column: &str) -> OrmResult<NaiveDateTime> {
        convert::parse_datetime(self.require(column)?)
    }

    /// Parse an unsigned 32-bit integer column.
    pub fn get_u32(&self, column: &str) -> OrmResult<u32> {
        convert::parse_u32(self.require(column)?)
    }

    /// Iterate `(column, value)` pairs in result order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Option::as_deref))
    }
}

/// Trait for converting a result row into a Rust struct.
///
/// # Example
///
/// ```
/// use myorm::{FromRow, OrmResult, Row};
///
/// struct Token {
///     user_id: u32,
///     access_token: String,
/// }
///
/// impl FromRow for Token {
///     fn from_row(row: &Row) -> OrmResult<Self> {
///         Ok(Self {
///             user_id: row.get_u32("user_id")?,
///             access_token: row.require("access_token")?.to_string(),
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Convert a row into Self
    fn from_row(row: &Row) -> OrmResult<Self>;
}

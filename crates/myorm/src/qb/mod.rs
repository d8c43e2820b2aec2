//! Map-driven query builders.
//!
//! Every builder renders MySQL-flavored SQL with positional `?` placeholders and collects the
//! values for them in the same pass.
//!
//! # Usage
//!
//! ```
//! use myorm::qb::{self, SqlQb};
//! use myorm::{QueryOptions, Value, ValueMap};
//!
//! let stmt = qb::select("products")
//!     .conditions(ValueMap::new().with("user_id", 7).with("deleted_at", Value::Null))
//!     .options(QueryOptions::new().order("created_at DESC").limit(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     stmt.sql,
//!     "SELECT * FROM `products` WHERE `deleted_at` IS NULL AND `user_id` = ? \
//!      ORDER BY created_at DESC LIMIT 0, 30;"
//! );
//! assert_eq!(stmt.params.len(), 1);
//! ```

mod delete;
mod insert;
mod options;
mod param;
mod select;
mod set_clause;
mod traits;
mod update;
mod where_clause;

#[cfg(test)]
mod tests;

use crate::value::Scalar;

pub use delete::DeleteQb;
pub use insert::{InsertForm, InsertQb};
pub use options::{LimitStyle, QueryOptions};
pub use param::ParamList;
pub use select::SelectQb;
pub use set_clause::SetClause;
pub use traits::{MutationQb, SqlQb};
pub use update::UpdateQb;
pub use where_clause::WhereClause;

/// A finished statement: SQL text plus the values for its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Scalar>,
}

/// Create a SELECT query builder for the given table.
pub fn select(table: &str) -> SelectQb {
    SelectQb::new(table)
}

/// Create an INSERT builder with explicit column and value lists.
pub fn insert(table: &str) -> InsertQb {
    InsertQb::new(table, InsertForm::Columns)
}

/// Create an `INSERT ... SET` builder. The table name is used verbatim.
pub fn insert_row(table: &str) -> InsertQb {
    InsertQb::new(table, InsertForm::Set)
}

/// Create an UPDATE query builder for the given table.
pub fn update(table: &str) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE query builder for the given table.
pub fn delete(table: &str) -> DeleteQb {
    DeleteQb::new(table)
}

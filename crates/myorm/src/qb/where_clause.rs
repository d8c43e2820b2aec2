//! WHERE clause builder shared by SELECT, UPDATE and DELETE.

use crate::ident::escape_id;
use crate::qb::param::{ParamList, placeholders};
use crate::value::{Value, ValueMap};

/// A rendered WHERE clause and the values for its placeholders.
///
/// `sql` is either empty or starts with ` WHERE `.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub params: ParamList,
}

impl WhereClause {
    /// Build from a condition map, one `AND`-joined condition per entry.
    ///
    /// - `Null` → `` `col` IS NULL ``
    /// - `List` → `` `col` IN(?, ?, ...) `` (an empty list never matches: `1=0`)
    /// - `Structured` → `` `col` = ? `` bound to compact JSON text
    /// - `Scalar` → `` `col` = ? ``
    pub fn build(conditions: &ValueMap) -> Self {
        let mut params = ParamList::new();
        let mut parts = Vec::with_capacity(conditions.len());

        for (column, value) in conditions {
            let column = escape_id(column);
            match value {
                Value::Null => parts.push(format!("{column} IS NULL")),
                Value::List(items) if items.is_empty() => parts.push("1=0".to_string()),
                Value::List(items) => {
                    parts.push(format!("{column} IN({})", placeholders(items.len())));
                    params.extend_params(items.iter().cloned());
                }
                Value::Scalar(_) | Value::Structured(_) => {
                    if let Some(bound) = value.to_bound() {
                        params.push(bound);
                    }
                    parts.push(format!("{column} = ?"));
                }
            }
        }

        let sql = if parts.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", parts.join(" AND "))
        };
        Self { sql, params }
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

//! DELETE query builder.

use crate::ident::escape_id;
use crate::qb::options::{LimitStyle, QueryOptions};
use crate::qb::param::ParamList;
use crate::qb::traits::{MutationQb, SqlQb};
use crate::qb::where_clause::WhereClause;
use crate::value::{Value, ValueMap};

/// `DELETE FROM <table><where><order><limit>;`
///
/// An empty condition map deletes every row, as the underlying statement would.
#[derive(Clone, Debug)]
pub struct DeleteQb {
    table: String,
    conditions: ValueMap,
    options: QueryOptions,
}

impl DeleteQb {
    /// Create a new DELETE query builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            conditions: ValueMap::new(),
            options: QueryOptions::default(),
        }
    }

    /// Replace the condition map.
    pub fn conditions(mut self, conditions: ValueMap) -> Self {
        self.conditions = conditions;
        self
    }

    /// Add one condition.
    pub fn condition(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.conditions.insert(column, value);
        self
    }

    /// Replace all options. Only `order` and `limit` apply to DELETE.
    pub fn options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn order(mut self, order: &str) -> Self {
        self.options.order = Some(order.to_string());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.options.limit = Some(limit);
        self
    }
}

impl SqlQb for DeleteQb {
    fn build_parts(&self) -> (String, ParamList) {
        let w = WhereClause::build(&self.conditions);
        let sql = format!(
            "DELETE FROM {}{}{}{};",
            escape_id(&self.table),
            w.sql,
            self.options.order_sql(),
            self.options.limit_sql(LimitStyle::Plain),
        );
        (sql, w.params)
    }
}

impl MutationQb for DeleteQb {}

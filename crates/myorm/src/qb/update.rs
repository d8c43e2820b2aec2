//! UPDATE query builder.

use crate::error::{OrmError, OrmResult};
use crate::ident::escape_id;
use crate::qb::options::{LimitStyle, QueryOptions};
use crate::qb::param::ParamList;
use crate::qb::set_clause::SetClause;
use crate::qb::traits::{MutationQb, SqlQb};
use crate::qb::where_clause::WhereClause;
use crate::value::{Value, ValueMap};

/// `UPDATE <table> SET <set><where><order><limit>;`
///
/// Bound values are the SET values followed by the WHERE values.
#[derive(Clone, Debug)]
pub struct UpdateQb {
    table: String,
    data: ValueMap,
    conditions: ValueMap,
    options: QueryOptions,
}

impl UpdateQb {
    /// Create a new UPDATE query builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            data: ValueMap::new(),
            conditions: ValueMap::new(),
            options: QueryOptions::default(),
        }
    }

    /// Replace the data map.
    pub fn data(mut self, data: ValueMap) -> Self {
        self.data = data;
        self
    }

    /// Set one column value.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.data.insert(column, value);
        self
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

    /// Replace all options. Only `order` and `limit` apply to UPDATE.
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

impl SqlQb for UpdateQb {
    fn build_parts(&self) -> (String, ParamList) {
        let set = SetClause::build(&self.data);
        let w = WhereClause::build(&self.conditions);
        let sql = format!(
            "UPDATE {} SET {}{}{}{};",
            escape_id(&self.table),
            set.sql,
            w.sql,
            self.options.order_sql(),
            self.options.limit_sql(LimitStyle::Plain),
        );

        let mut params = set.params;
        params.extend(w.params);
        (sql, params)
    }

    fn validate(&self) -> OrmResult<()> {
        if self.data.is_empty() {
            return Err(OrmError::validation(format!(
                "UPDATE {} requires at least one SET column",
                self.table
            )));
        }
        Ok(())
    }
}

impl MutationQb for UpdateQb {}

//! SELECT query builder.

use crate::db::Db;
use crate::driver::Driver;
use crate::error::OrmResult;
use crate::ident::escape_id;
use crate::qb::options::{LimitStyle, QueryOptions};
use crate::qb::param::ParamList;
use crate::qb::traits::SqlQb;
use crate::qb::where_clause::WhereClause;
use crate::row::Row;
use crate::value::{Value, ValueMap};

/// `SELECT <columns> FROM <table><where><order><limit>;`
#[derive(Clone, Debug)]
pub struct SelectQb {
    table: String,
    conditions: ValueMap,
    options: QueryOptions,
}

impl SelectQb {
    /// Create a new SELECT query builder for a table.
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

    /// Replace all options.
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

    pub fn offset(mut self, offset: u64) -> Self {
        self.options.offset = Some(offset);
        self
    }

    /// Execute and return every row.
    pub fn fetch_all<D: Driver>(&self, db: &mut Db<D>) -> OrmResult<Vec<Row>> {
        let stmt = self.build()?;
        db.exec_query(&stmt.sql, &stmt.params)
    }
}

impl SqlQb for SelectQb {
    fn build_parts(&self) -> (String, ParamList) {
        let w = WhereClause::build(&self.conditions);
        let sql = format!(
            "SELECT {} FROM {}{}{}{};",
            self.options.columns_sql(),
            escape_id(&self.table),
            w.sql,
            self.options.order_sql(),
            self.options.limit_sql(LimitStyle::WithOffset),
        );
        (sql, w.params)
    }
}

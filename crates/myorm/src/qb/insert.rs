//! INSERT query builders.

use crate::error::{OrmError, OrmResult};
use crate::ident::escape_id;
use crate::qb::param::ParamList;
use crate::qb::set_clause::{ColumnValues, SetClause};
use crate::qb::traits::{MutationQb, SqlQb};
use crate::value::{Value, ValueMap};

/// How the inserted columns are written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertForm {
    /// ``INSERT INTO `t`(`a`, `b`) VALUES(?, ?)``
    Columns,
    /// `INSERT INTO t SET `a` = ?, `b` = ?;` with the table name used verbatim.
    Set,
}

/// INSERT query builder for a single row.
#[derive(Clone, Debug)]
pub struct InsertQb {
    table: String,
    data: ValueMap,
    form: InsertForm,
}

impl InsertQb {
    /// Create a new INSERT query builder.
    pub fn new(table: &str, form: InsertForm) -> Self {
        Self {
            table: table.to_string(),
            data: ValueMap::new(),
            form,
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
}

impl SqlQb for InsertQb {
    fn build_parts(&self) -> (String, ParamList) {
        match self.form {
            InsertForm::Columns => {
                let cv = ColumnValues::build(&self.data);
                let sql = format!(
                    "INSERT INTO {}({}) VALUES({})",
                    escape_id(&self.table),
                    cv.columns,
                    cv.values
                );
                (sql, cv.params)
            }
            InsertForm::Set => {
                let set = SetClause::build(&self.data);
                let sql = format!("INSERT INTO {} SET {};", self.table, set.sql);
                (sql, set.params)
            }
        }
    }

    fn validate(&self) -> OrmResult<()> {
        if self.data.is_empty() {
            return Err(OrmError::validation(format!(
                "INSERT INTO {} requires at least one column",
                self.table
            )));
        }
        Ok(())
    }
}

impl MutationQb for InsertQb {}

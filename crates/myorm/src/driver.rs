//! The blocking database driver seam.
//!
//! The builders never talk to a database themselves; [`Db`](crate::db::Db) hands finished
//! statements to a [`Driver`]. The `mysql` feature provides
//! [`MysqlDriver`](crate::mysql_driver::MysqlDriver); tests plug in their own.

use crate::error::DriverError;
use crate::row::Row;
use crate::value::Scalar;

/// Summary of an executed INSERT/UPDATE/DELETE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
    /// Auto-increment id generated by the statement, if any.
    pub last_insert_id: Option<u64>,
}

/// A blocking connection that runs SQL with positional `?` parameters.
///
/// Implementations must release any server-side cursor before returning, on both the
/// success and the error path.
pub trait Driver {
    /// Run a query and collect every row.
    fn query_rows(&mut self, sql: &str, params: &[Scalar]) -> Result<Vec<Row>, DriverError>;

    /// Run a statement that returns no rows.
    fn execute(&mut self, sql: &str, params: &[Scalar]) -> Result<ExecResult, DriverError>;
}

impl<D: Driver + ?Sized> Driver for &mut D {
    fn query_rows(&mut self, sql: &str, params: &[Scalar]) -> Result<Vec<Row>, DriverError> {
        (**self).query_rows(sql, params)
    }

    fn execute(&mut self, sql: &str, params: &[Scalar]) -> Result<ExecResult, DriverError> {
        (**self).execute(sql, params)
    }
}

impl<D: Driver + ?Sized> Driver for Box<D> {
    fn query_rows(&mut self, sql: &str, params: &[Scalar]) -> Result<Vec<Row>, DriverError> {
        (**self).query_rows(sql, params)
    }

    fn execute(&mut self, sql: &str, params: &[Scalar]) -> Result<ExecResult, DriverError> {
        (**self).execute(sql, params)
    }
}

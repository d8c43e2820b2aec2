//! Trait definitions for query builders.

use crate::db::Db;
use crate::driver::{Driver, ExecResult};
use crate::error::OrmResult;
use crate::qb::Statement;
use crate::qb::param::ParamList;

/// Base trait for all query builders.
///
/// The SQL text and its values are produced by one call, so the number and order of
/// `?` placeholders always matches the values.
pub trait SqlQb {
    /// Render the SQL and collect the values bound to its placeholders.
    fn build_parts(&self) -> (String, ParamList);

    /// Validate builder state before execution.
    fn validate(&self) -> OrmResult<()> {
        Ok(())
    }

    /// Debug helper to get the SQL string.
    fn to_sql(&self) -> String {
        self.build_parts().0
    }

    /// Validate and build the final statement.
    fn build(&self) -> OrmResult<Statement> {
        self.validate()?;
        let (sql, params) = self.build_parts();
        Ok(Statement {
            sql,
            params: params.into_vec(),
        })
    }
}

/// Trait for mutation builders (INSERT/UPDATE/DELETE).
pub trait MutationQb: SqlQb {
    /// Execute and return the driver's execution summary.
    fn execute<D: Driver>(&self, db: &mut Db<D>) -> OrmResult<ExecResult> {
        let stmt = self.build()?;
        db.exec(&stmt.sql, &stmt.params)
    }
}

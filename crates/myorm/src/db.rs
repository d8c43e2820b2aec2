//! The `Db` handle: one driver connection plus the debug flag and query hooks.

use crate::driver::{Driver, ExecResult};
use crate::error::{OrmError, OrmResult};
use crate::monitor::{HookAction, QueryContext, QueryHook, QueryResult, TracingSqlHook};
use crate::qb::{self, MutationQb, QueryOptions, SqlQb, Statement};
use crate::row::Row;
use crate::value::{Scalar, ValueMap};
use std::sync::Arc;
use std::time::Instant;

/// A database handle that builds statements from value maps and runs them on its driver.
///
/// Every operation is blocking and runs on the caller's thread. Driver failures come back as
/// [`OrmError::Query`] carrying the statement and its values; nothing is retried.
///
/// ```ignore
/// use myorm::{Db, QueryOptions, ValueMap};
///
/// let mut db = myorm::mysql_driver::connect(&config)?.with_debug(true);
/// let rows = db.select(
///     "products",
///     &ValueMap::new().with("user_id", user_id),
///     Some(&QueryOptions::new().order("created_at DESC").limit(30)),
/// )?;
/// ```
pub struct Db<D> {
    driver: D,
    debug: bool,
    debug_hook: TracingSqlHook,
    hooks: Vec<Arc<dyn QueryHook>>,
}

impl<D: Driver> Db<D> {
    /// Wrap a driver connection.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            debug: false,
            debug_hook: TracingSqlHook::default(),
            hooks: Vec::new(),
        }
    }

    /// Log every statement with its values before execution.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Toggle statement logging.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Replace the hook used for debug logging (level, truncation).
    pub fn with_debug_hook(mut self, hook: TracingSqlHook) -> Self {
        self.debug_hook = hook;
        self
    }

    /// Add a hook that runs around every statement.
    pub fn with_hook(mut self, hook: impl QueryHook + 'static) -> Self {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Add a shared hook.
    pub fn add_hook(&mut self, hook: Arc<dyn QueryHook>) {
        self.hooks.push(hook);
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    // ==================== Statement operations ====================

    /// `SELECT` rows from `table` matching `conditions`.
    ///
    /// Options: `column` / `columns` pick the output columns (default `*`), `order` is
    /// appended verbatim, `limit` / `offset` render as `LIMIT offset, limit`.
    pub fn select(
        &mut self,
        table: &str,
        conditions: &ValueMap,
        options: Option<&QueryOptions>,
    ) -> OrmResult<Vec<Row>> {
        let stmt = qb::select(table)
            .conditions(conditions.clone())
            .options(options.cloned().unwrap_or_default())
            .build()?;
        self.fetch(&stmt)
    }

    /// Same as [`Db::select`] with `limit` forced to 1.
    ///
    /// Returns `None` unless exactly one row came back.
    pub fn first(
        &mut self,
        table: &str,
        conditions: &ValueMap,
        options: Option<&QueryOptions>,
    ) -> OrmResult<Option<Row>> {
        let options = QueryOptions::first(options);
        let mut rows = self.select(table, conditions, Some(&options))?;
        if rows.len() == 1 {
            Ok(rows.pop())
        } else {
            Ok(None)
        }
    }

    /// ``INSERT INTO `table`(`a`, `b`) VALUES(?, ?)``
    pub fn insert(&mut self, table: &str, data: &ValueMap) -> OrmResult<ExecResult> {
        qb::insert(table).data(data.clone()).execute(self)
    }

    /// `INSERT INTO table SET `a` = ?, `b` = ?;` (table name used verbatim).
    pub fn insert_row(&mut self, table: &str, data: &ValueMap) -> OrmResult<ExecResult> {
        qb::insert_row(table).data(data.clone()).execute(self)
    }

    /// `UPDATE` rows matching `conditions`. Options: `order`, `limit`.
    pub fn update(
        &mut self,
        table: &str,
        data: &ValueMap,
        conditions: &ValueMap,
        options: Option<&QueryOptions>,
    ) -> OrmResult<ExecResult> {
        qb::update(table)
            .data(data.clone())
            .conditions(conditions.clone())
            .options(options.cloned().unwrap_or_default())
            .execute(self)
    }

    /// Same as [`Db::update`] with `limit` forced to 1.
    pub fn update_first(
        &mut self,
        table: &str,
        data: &ValueMap,
        conditions: &ValueMap,
        options: Option<&QueryOptions>,
    ) -> OrmResult<ExecResult> {
        let options = QueryOptions::first(options);
        self.update(table, data, conditions, Some(&options))
    }

    /// `DELETE` rows matching `conditions`. Options: `order`, `limit`.
    pub fn delete(
        &mut self,
        table: &str,
        conditions: &ValueMap,
        options: Option<&QueryOptions>,
    ) -> OrmResult<ExecResult> {
        qb::delete(table)
            .conditions(conditions.clone())
            .options(options.cloned().unwrap_or_default())
            .execute(self)
    }

    /// Same as [`Db::delete`] with `limit` forced to 1.
    pub fn delete_first(
        &mut self,
        table: &str,
        conditions: &ValueMap,
        options: Option<&QueryOptions>,
    ) -> OrmResult<ExecResult> {
        let options = QueryOptions::first(options);
        self.delete(table, conditions, Some(&options))
    }

    // ==================== Raw execution ====================

    /// Run a built statement that returns rows.
    pub fn fetch(&mut self, stmt: &Statement) -> OrmResult<Vec<Row>> {
        self.exec_query(&stmt.sql, &stmt.params)
    }

    /// Run arbitrary SQL that returns rows.
    pub fn exec_query(&mut self, sql: &str, params: &[Scalar]) -> OrmResult<Vec<Row>> {
        let ctx = QueryContext::new(sql, params);
        self.before(&ctx)?;

        let start = Instant::now();
        let result = self.driver.query_rows(sql, params);
        let outcome = match &result {
            Ok(rows) => QueryResult::Rows(rows.len()),
            Err(e) => QueryResult::Error(e.to_string()),
        };
        self.after(&ctx, start, &outcome);

        result.map_err(|e| Self::wrap(sql, params, e))
    }

    /// Run arbitrary SQL that returns no rows.
    pub fn exec(&mut self, sql: &str, params: &[Scalar]) -> OrmResult<ExecResult> {
        let ctx = QueryContext::new(sql, params);
        self.before(&ctx)?;

        let start = Instant::now();
        let result = self.driver.execute(sql, params);
        let outcome = match &result {
            Ok(summary) => QueryResult::Affected(summary.rows_affected),
            Err(e) => QueryResult::Error(e.to_string()),
        };
        self.after(&ctx, start, &outcome);

        result.map_err(|e| Self::wrap(sql, params, e))
    }

    fn before(&self, ctx: &QueryContext<'_>) -> OrmResult<()> {
        if self.debug {
            self.debug_hook.before_query(ctx);
        }
        for hook in &self.hooks {
            if let HookAction::Abort(reason) = hook.before_query(ctx) {
                tracing::debug!(target: "myorm", sql = ctx.sql, %reason, "query aborted by hook");
                return Err(OrmError::Aborted(reason));
            }
        }
        Ok(())
    }

    fn after(&self, ctx: &QueryContext<'_>, start: Instant, outcome: &QueryResult) {
        let elapsed = start.elapsed();
        if self.debug {
            self.debug_hook.after_query(ctx, elapsed, outcome);
        }
        for hook in &self.hooks {
            hook.after_query(ctx, elapsed, outcome);
        }
    }

    fn wrap(sql: &str, params: &[Scalar], err: crate::error::DriverError) -> OrmError {
        tracing::warn!(target: "myorm", sql, error = %err, "statement failed");
        OrmError::query(sql, params.to_vec(), err)
    }
}

impl<D> std::fmt::Debug for Db<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("debug", &self.debug)
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

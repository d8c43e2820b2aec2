use super::truncate_sql_bytes;
use super::types::{HookAction, QueryContext, QueryHook, QueryResult};
use std::time::Duration;
use tracing::Level;

/// A `tracing`-based hook that logs every statement and its bound values before execution.
///
/// This is what [`Db::set_debug`](crate::Db::set_debug) installs. Events use the target
/// `myorm.sql`.
#[derive(Debug, Clone)]
pub struct TracingSqlHook {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
    /// Also log duration and outcome after execution.
    pub log_completion: bool,
}

impl Default for TracingSqlHook {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            max_sql_length: Some(1024),
            log_completion: false,
        }
    }
}

impl TracingSqlHook {
    /// Create a new hook with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// Log duration and outcome after each statement as well.
    pub fn log_completion(mut self, enabled: bool) -> Self {
        self.log_completion = enabled;
        self
    }

    pub(crate) fn truncate_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }
}

/// Dispatch a tracing event at a runtime-determined level.
macro_rules! emit_at_level {
    ($level:expr, $($field:tt)*) => {
        match $level {
            Level::ERROR => tracing::error!($($field)*),
            Level::WARN  => tracing::warn!($($field)*),
            Level::INFO  => tracing::info!($($field)*),
            Level::DEBUG => tracing::debug!($($field)*),
            Level::TRACE => tracing::trace!($($field)*),
        }
    };
}

impl QueryHook for TracingSqlHook {
    fn before_query(&self, ctx: &QueryContext<'_>) -> HookAction {
        let sql = self.truncate_sql(ctx.sql);
        emit_at_level!(
            self.level,
            target: "myorm.sql",
            query_type = ?ctx.query_type,
            param_count = ctx.params.len(),
            params = ?ctx.params,
            sql = %sql,
        );
        HookAction::Continue
    }

    fn after_query(&self, ctx: &QueryContext<'_>, duration: Duration, result: &QueryResult) {
        if !self.log_completion {
            return;
        }
        emit_at_level!(
            self.level,
            target: "myorm.sql",
            query_type = ?ctx.query_type,
            elapsed = ?duration,
            result = %result,
        );
    }
}

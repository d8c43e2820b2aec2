//! Query hooks for SQL execution.
//!
//! Every statement run through a [`Db`](crate::Db) passes through the installed
//! [`QueryHook`]s: `before_query` can log or refuse it, `after_query` sees the outcome and
//! how long the driver took.
//!
//! # Example
//!
//! ```rust,ignore
//! use myorm::monitor::{HookAction, QueryContext, QueryHook};
//!
//! struct NoDeletes;
//!
//! impl QueryHook for NoDeletes {
//!     fn before_query(&self, ctx: &QueryContext<'_>) -> HookAction {
//!         if ctx.query_type == QueryType::Delete {
//!             return HookAction::Abort("deletes are disabled".into());
//!         }
//!         HookAction::Continue
//!     }
//! }
//!
//! let db = Db::new(driver).with_hook(NoDeletes).with_debug(true);
//! ```

mod tracing_hook;
mod types;

#[cfg(test)]
mod tests;

pub use tracing_hook::TracingSqlHook;
pub use types::{HookAction, QueryContext, QueryHook, QueryResult, QueryType};

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

//! Output columns, ORDER BY and LIMIT/OFFSET options.

use crate::ident::escape_id;
use serde::Deserialize;

/// Optional modifiers for SELECT / UPDATE / DELETE.
///
/// `offset` only has an effect together with `limit`, and only for SELECT.
///
/// ```
/// use myorm::QueryOptions;
///
/// let opts = QueryOptions::new().order("created_at DESC").limit(30);
/// assert_eq!(opts.limit, Some(30));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Single output column; wins over `columns`.
    pub column: Option<String>,
    /// Output columns, in order.
    pub columns: Option<Vec<String>>,
    /// Raw ORDER BY expression (trusted, not escaped).
    pub order: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// How the LIMIT fragment is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// `LIMIT <offset>, <limit>` (SELECT).
    WithOffset,
    /// `LIMIT <limit>` (UPDATE / DELETE).
    Plain,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a single column.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Select several columns.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The options used by the `*_first` operations: same as `options`, with `limit = 1`.
    pub fn first(options: Option<&QueryOptions>) -> Self {
        let mut options = options.cloned().unwrap_or_default();
        options.limit = Some(1);
        options
    }

    pub(crate) fn columns_sql(&self) -> String {
        if let Some(column) = &self.column {
            return escape_id(column);
        }
        match &self.columns {
            Some(columns) if !columns.is_empty() => columns
                .iter()
                .map(|c| escape_id(c))
                .collect::<Vec<_>>()
                .join(", "),
            _ => "*".to_string(),
        }
    }

    pub(crate) fn order_sql(&self) -> String {
        match self.order.as_deref() {
            Some(order) if !order.is_empty() => format!(" ORDER BY {order}"),
            _ => String::new(),
        }
    }

    pub(crate) fn limit_sql(&self, style: LimitStyle) -> String {
        let Some(limit) = self.limit else {
            return String::new();
        };
        match style {
            LimitStyle::WithOffset => format!(" LIMIT {}, {limit}", self.offset.unwrap_or(0)),
            LimitStyle::Plain => format!(" LIMIT {limit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_default_to_star() {
        assert_eq!(QueryOptions::new().columns_sql(), "*");
        assert_eq!(
            QueryOptions::new().columns(Vec::<String>::new()).columns_sql(),
            "*"
        );
    }

    #[test]
    fn single_column_wins() {
        let opts = QueryOptions::new().columns(["a", "b"]).column("id");
        assert_eq!(opts.columns_sql(), "`id`");

        let opts = QueryOptions::new().columns(["a", "t.b"]);
        assert_eq!(opts.columns_sql(), "`a`, `t`.`b`");
    }

    #[test]
    fn order_is_verbatim() {
        assert_eq!(
            QueryOptions::new().order("created_at DESC, id").order_sql(),
            " ORDER BY created_at DESC, id"
        );
        assert_eq!(QueryOptions::new().order("").order_sql(), "");
        assert_eq!(QueryOptions::new().order_sql(), "");
    }

    #[test]
    fn limit_and_offset() {
        let none = QueryOptions::new().offset(10);
        assert_eq!(none.limit_sql(LimitStyle::WithOffset), "");
        assert_eq!(none.limit_sql(LimitStyle::Plain), "");

        let limit = QueryOptions::new().limit(5);
        assert_eq!(limit.limit_sql(LimitStyle::WithOffset), " LIMIT 0, 5");
        assert_eq!(limit.limit_sql(LimitStyle::Plain), " LIMIT 5");

        let paged = QueryOptions::new().limit(5).offset(10);
        assert_eq!(paged.limit_sql(LimitStyle::WithOffset), " LIMIT 10, 5");
        assert_eq!(paged.limit_sql(LimitStyle::Plain), " LIMIT 5");
    }

    #[test]
    fn first_forces_limit_one() {
        assert_eq!(QueryOptions::first(None).limit, Some(1));

        let caller = QueryOptions::new().limit(100).order("id");
        let first = QueryOptions::first(Some(&caller));
        assert_eq!(first.limit, Some(1));
        assert_eq!(first.order.as_deref(), Some("id"));
        assert_eq!(caller.limit, Some(100));
    }

    #[test]
    fn deserializes_from_json() {
        let opts: QueryOptions =
            serde_json::from_str(r#"{"columns": ["id", "email"], "limit": 30}"#).unwrap();
        assert_eq!(opts.columns_sql(), "`id`, `email`");
        assert_eq!(opts.limit, Some(30));
        assert_eq!(opts.offset, None);
    }
}

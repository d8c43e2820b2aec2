//! Error types for myorm

use crate::value::Scalar;
use std::fmt;
use thiserror::Error;

/// Result type alias for myorm operations
pub type OrmResult<T> = Result<T, OrmError>;

/// Error types for database operations
#[derive(Debug, Error)]
pub enum OrmError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement execution failed in the driver
    #[error("Query error: {0}")]
    Query(Box<QueryError>),

    /// A column was not present in a row
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed text handed to a scalar converter
    #[error("Parse error for '{input}': {message}")]
    Parse { input: String, message: String },

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A query hook refused to run the statement
    #[error("Query aborted: {0}")]
    Aborted(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl OrmError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a parse error for the given input text
    pub fn parse(input: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.to_string(),
        }
    }

    /// Wrap a driver failure together with the statement that caused it.
    pub fn query(sql: impl Into<String>, params: Vec<Scalar>, source: DriverError) -> Self {
        Self::Query(Box::new(QueryError {
            sql: sql.into(),
            params,
            source,
        }))
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a converter parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a wrapped driver failure
    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// The failed statement, if this error came from the driver.
    pub fn as_query_error(&self) -> Option<&QueryError> {
        match self {
            Self::Query(err) => Some(err),
            _ => None,
        }
    }

    /// Server error code reported by the database, if any.
    pub fn driver_code(&self) -> Option<u16> {
        self.as_query_error().and_then(|err| err.source.code())
    }
}

/// A failed statement: the SQL text, its bound values and the driver failure.
#[derive(Debug)]
pub struct QueryError {
    pub sql: String,
    pub params: Vec<Scalar>,
    pub source: DriverError,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | sql: {} | params: {:?}", self.source, self.sql, self.params)
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Failure reported by a [`Driver`](crate::driver::Driver).
#[derive(Debug, Error)]
pub enum DriverError {
    /// Structured error returned by the database server.
    #[error("server error {code} ({state}): {message}")]
    Server {
        code: u16,
        state: String,
        message: String,
    },

    /// Any other failure (I/O, protocol, conversion) passed through untouched.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl DriverError {
    /// Create a server error.
    pub fn server(code: u16, state: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Server {
            code,
            state: state.into(),
            message: message.into(),
        }
    }

    /// Wrap an arbitrary error.
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(err))
    }

    /// Server error code, if the failure came from the server.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Server { code, .. } => Some(*code),
            Self::Other(_) => None,
        }
    }
}

impl From<toml::de::Error> for OrmError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_keeps_statement_and_values() {
        let err = OrmError::query(
            "SELECT * FROM `users` WHERE `id` = ?;",
            vec![Scalar::Int(7)],
            DriverError::server(1146, "42S02", "Table 'app.users' doesn't exist"),
        );

        assert!(err.is_query());
        assert_eq!(err.driver_code(), Some(1146));

        let query = err.as_query_error().unwrap();
        assert_eq!(query.sql, "SELECT * FROM `users` WHERE `id` = ?;");
        assert_eq!(query.params, vec![Scalar::Int(7)]);

        let msg = err.to_string();
        assert!(msg.contains("1146"));
        assert!(msg.contains("`users`"));
    }

    #[test]
    fn other_driver_errors_have_no_code() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "connection reset");
        let err = OrmError::query("DELETE FROM `t`;", Vec::new(), DriverError::other(io));
        assert_eq!(err.driver_code(), None);
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn predicates() {
        assert!(OrmError::not_found("column 'x'").is_not_found());
        assert!(OrmError::parse("abc", "invalid digit").is_parse());
        assert!(!OrmError::validation("empty").is_query());
    }
}

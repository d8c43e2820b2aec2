//! # myorm
//!
//! A small map-driven query layer for MySQL.
//!
//! ## Features
//!
//! - **Maps in, SQL out**: conditions and data are [`ValueMap`]s; every value is bound
//!   through a `?` placeholder
//! - **Deterministic**: columns render in key order, so the same input always produces
//!   the same statement
//! - **Escaped identifiers**: table and column names are backtick-quoted
//! - **Query monitoring**: debug logging through `tracing` and user hooks around every statement
//! - **Pluggable driver**: [`Db`] runs on any [`Driver`]; the `mysql` feature ships one
//!
//! ## Usage
//!
//! ```ignore
//! use myorm::{Config, QueryOptions, Value, ValueMap};
//!
//! let mut db = myorm::connect(&Config::from_env()?)?.with_debug(true);
//!
//! // SELECT * FROM `products` WHERE `user_id` = ? ORDER BY created_at DESC LIMIT 0, 30;
//! let products = db.select(
//!     "products",
//!     &ValueMap::new().with("user_id", 7),
//!     Some(&QueryOptions::new().order("created_at DESC").limit(30)),
//! )?;
//!
//! // INSERT INTO `users`(`email`, `name`) VALUES(?, ?)
//! db.insert("users", &ValueMap::new().with("email", "a@b.com").with("name", "alice"))?;
//!
//! // UPDATE `users` SET `nickname` = NULL WHERE `id` = ? LIMIT 1;
//! db.update_first(
//!     "users",
//!     &ValueMap::new().with("nickname", Value::Null),
//!     &ValueMap::new().with("id", 7),
//!     None,
//! )?;
//! ```

pub mod config;
pub mod convert;
pub mod db;
pub mod driver;
pub mod error;
pub mod ident;
pub mod monitor;
pub mod prelude;
pub mod qb;
pub mod row;
pub mod value;

#[cfg(feature = "mysql")]
pub mod mysql_driver;

pub use config::Config;
pub use db::Db;
pub use driver::{Driver, ExecResult};
pub use error::{DriverError, OrmError, OrmResult, QueryError};
pub use ident::{Ident, escape_id};
pub use monitor::{HookAction, QueryContext, QueryHook, QueryResult, QueryType, TracingSqlHook};
pub use qb::{MutationQb, QueryOptions, SqlQb, Statement};
pub use row::{FromRow, Row};
pub use value::{Scalar, Value, ValueMap};

#[cfg(feature = "mysql")]
pub use mysql_driver::{MysqlDriver, connect};

//! Convenient imports for typical `myorm` usage.
//!
//! ```ignore
//! use myorm::prelude::*;
//! ```

pub use crate::{
    Config, Db, Driver, FromRow, OrmError, OrmResult, QueryOptions, Row, Scalar, Value, ValueMap,
};

#[cfg(feature = "mysql")]
pub use crate::{MysqlDriver, connect};

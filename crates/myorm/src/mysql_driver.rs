//! [`Driver`] implementation over the `mysql` crate.

use crate::config::Config;
use crate::db::Db;
use crate::driver::{Driver, ExecResult};
use crate::error::{DriverError, OrmError, OrmResult};
use crate::row::Row;
use crate::value::Scalar;
use mysql::consts::ColumnType;
use mysql::prelude::Queryable;
use mysql::{Conn, Params};
use std::sync::Arc;

/// A single blocking MySQL connection.
pub struct MysqlDriver {
    conn: Conn,
}

impl MysqlDriver {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    pub fn conn_mut(&mut self) -> &mut Conn {
        &mut self.conn
    }

    pub fn into_conn(self) -> Conn {
        self.conn
    }
}

/// Open a connection described by `config` and check it with a round trip.
pub fn connect(config: &Config) -> OrmResult<Db<MysqlDriver>> {
    let target = config.target();
    let mut conn = Conn::new(config.to_opts())
        .map_err(|e| OrmError::Connection(format!("{target}: {e}")))?;
    conn.query_drop("SELECT 1")
        .map_err(|e| OrmError::Connection(format!("{target}: {e}")))?;

    tracing::debug!(target: "myorm", %target, db = %config.name, "connected");
    Ok(Db::new(MysqlDriver::new(conn)))
}

impl Driver for MysqlDriver {
    fn query_rows(&mut self, sql: &str, params: &[Scalar]) -> Result<Vec<Row>, DriverError> {
        let result = self.conn.exec_iter(sql, to_params(params)).map_err(map_err)?;

        let columns: Arc<[String]> = result
            .columns()
            .as_ref()
            .iter()
            .map(|c| c.name_str().into_owned())
            .collect();

        let mut rows = Vec::new();
        for row in result {
            let row = row.map_err(map_err)?;
            let values = row
                .columns_ref()
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    row.as_ref(i).and_then(|v| {
                        value_to_text(v, column.column_type(), column.decimals())
                    })
                })
                .collect();
            rows.push(Row::new(Arc::clone(&columns), values));
        }
        Ok(rows)
    }

    fn execute(&mut self, sql: &str, params: &[Scalar]) -> Result<ExecResult, DriverError> {
        let result = self.conn.exec_iter(sql, to_params(params)).map_err(map_err)?;
        let summary = ExecResult {
            rows_affected: result.affected_rows(),
            last_insert_id: result.last_insert_id().filter(|id| *id != 0),
        };
        drop(result);
        Ok(summary)
    }
}

fn to_params(params: &[Scalar]) -> Params {
    if params.is_empty() {
        return Params::Empty;
    }
    Params::Positional(params.iter().map(to_mysql_value).collect())
}

fn to_mysql_value(value: &Scalar) -> mysql::Value {
    match value {
        Scalar::Int(v) => mysql::Value::Int(*v),
        Scalar::UInt(v) => mysql::Value::UInt(*v),
        Scalar::Float(v) => mysql::Value::Double(*v),
        Scalar::Bool(v) => mysql::Value::Int(i64::from(*v)),
        Scalar::Text(v) => mysql::Value::Bytes(v.as_bytes().to_vec()),
    }
}

fn map_err(err: mysql::Error) -> DriverError {
    match err {
        mysql::Error::MySqlError(e) => DriverError::server(e.code, e.state, e.message),
        other => DriverError::other(other),
    }
}

/// Text form of a result value; `None` for SQL NULL.
///
/// DATE columns render as `YYYY-MM-DD`; DATETIME and TIMESTAMP add the time of day.
fn value_to_text(value: &mysql::Value, column_type: ColumnType, decimals: u8) -> Option<String> {
    let text = match value {
        mysql::Value::NULL => return None,
        mysql::Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        mysql::Value::Int(v) => v.to_string(),
        mysql::Value::UInt(v) => v.to_string(),
        mysql::Value::Float(v) => v.to_string(),
        mysql::Value::Double(v) => v.to_string(),
        mysql::Value::Date(year, month, day, ..)
            if matches!(
                column_type,
                ColumnType::MYSQL_TYPE_DATE | ColumnType::MYSQL_TYPE_NEWDATE
            ) =>
        {
            format!("{year:04}-{month:02}-{day:02}")
        }
        mysql::Value::Date(year, month, day, hour, minute, second, micros) => format!(
            "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}{}",
            fraction(*micros, decimals)
        ),
        mysql::Value::Time(negative, days, hours, minutes, seconds, micros) => {
            let total_hours = u64::from(*days) * 24 + u64::from(*hours);
            format!(
                "{}{total_hours:02}:{minutes:02}:{seconds:02}{}",
                if *negative { "-" } else { "" },
                fraction(*micros, decimals)
            )
        }
    };
    Some(text)
}

/// `.ffffff` cut to the column's fractional digits.
fn fraction(micros: u32, decimals: u8) -> String {
    let digits = usize::from(decimals.min(6));
    if digits == 0 {
        return String::new();
    }
    let full = format!("{micros:06}");
    format!(".{}", &full[..digits])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mysql::Value;

    #[test]
    fn scalars_to_params() {
        assert!(matches!(to_params(&[]), Params::Empty));
        let Params::Positional(values) =
            to_params(&[Scalar::Int(-1), Scalar::Bool(true), Scalar::Text("x".into())])
        else {
            panic!("expected positional params");
        };
        assert_eq!(
            values,
            vec![Value::Int(-1), Value::Int(1), Value::Bytes(b"x".to_vec())]
        );
    }

    const TEXT: ColumnType = ColumnType::MYSQL_TYPE_VAR_STRING;
    const DATETIME: ColumnType = ColumnType::MYSQL_TYPE_DATETIME;

    #[test]
    fn text_of_plain_values() {
        assert_eq!(value_to_text(&Value::NULL, TEXT, 0), None);
        assert_eq!(
            value_to_text(&Value::Bytes(b"alice".to_vec()), TEXT, 0).as_deref(),
            Some("alice")
        );
        let long = ColumnType::MYSQL_TYPE_LONGLONG;
        assert_eq!(value_to_text(&Value::Int(-7), long, 0).as_deref(), Some("-7"));
        assert_eq!(value_to_text(&Value::UInt(7), long, 0).as_deref(), Some("7"));
        let double = ColumnType::MYSQL_TYPE_DOUBLE;
        assert_eq!(value_to_text(&Value::Double(1.5), double, 0).as_deref(), Some("1.5"));
    }

    #[test]
    fn text_of_dates() {
        let date = Value::Date(2024, 3, 9, 8, 5, 1, 123_456);
        assert_eq!(
            value_to_text(&date, DATETIME, 0).as_deref(),
            Some("2024-03-09 08:05:01")
        );
        assert_eq!(
            value_to_text(&date, DATETIME, 3).as_deref(),
            Some("2024-03-09 08:05:01.123")
        );
        assert_eq!(
            value_to_text(&date, ColumnType::MYSQL_TYPE_TIMESTAMP, 6).as_deref(),
            Some("2024-03-09 08:05:01.123456")
        );

        let day = Value::Date(2024, 3, 9, 0, 0, 0, 0);
        assert_eq!(
            value_to_text(&day, ColumnType::MYSQL_TYPE_DATE, 0).as_deref(),
            Some("2024-03-09")
        );
        assert_eq!(
            value_to_text(&day, ColumnType::MYSQL_TYPE_NEWDATE, 0).as_deref(),
            Some("2024-03-09")
        );
        assert_eq!(
            value_to_text(&day, DATETIME, 0).as_deref(),
            Some("2024-03-09 00:00:00")
        );
    }

    #[test]
    fn text_of_times() {
        let time_type = ColumnType::MYSQL_TYPE_TIME;
        let time = Value::Time(true, 1, 2, 3, 4, 0);
        assert_eq!(value_to_text(&time, time_type, 0).as_deref(), Some("-26:03:04"));
        let time = Value::Time(false, 34, 22, 59, 59, 0);
        assert_eq!(value_to_text(&time, time_type, 0).as_deref(), Some("838:59:59"));
    }

    #[test]
    fn server_errors_keep_code() {
        let err = map_err(mysql::Error::MySqlError(mysql::MySqlError {
            state: "42S02".into(),
            message: "Table 'shop.nope' doesn't exist".into(),
            code: 1146,
        }));
        assert_eq!(err.code(), Some(1146));
    }
}

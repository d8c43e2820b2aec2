//! Statement-level tests for the qb module.

use crate::qb::{self, QueryOptions, SqlQb};
use crate::value::{Scalar, Value, ValueMap};
use serde_json::json;

#[test]
fn test_select_basic() {
    let qb = qb::select("users");
    assert_eq!(qb.to_sql(), "SELECT * FROM `users`;");
}

#[test]
fn test_select_with_conditions() {
    let stmt = qb::select("users")
        .condition("status", "active")
        .condition("id", vec![1, 2, 3])
        .limit(10)
        .build()
        .unwrap();

    assert_eq!(
        stmt.sql,
        "SELECT * FROM `users` WHERE `id` IN(?, ?, ?) AND `status` = ? LIMIT 0, 10;"
    );
    assert_eq!(
        stmt.params,
        vec![
            Scalar::Int(1),
            Scalar::Int(2),
            Scalar::Int(3),
            Scalar::Text("active".into())
        ]
    );
}

#[test]
fn test_select_limit_offset() {
    let w = ValueMap::new().with("user_id", 1);

    let limited = qb::select("t")
        .conditions(w.clone())
        .options(QueryOptions::new().limit(5))
        .to_sql();
    assert!(limited.ends_with(" LIMIT 0, 5;"));

    let paged = qb::select("t")
        .conditions(w.clone())
        .options(QueryOptions::new().limit(5).offset(10))
        .to_sql();
    assert!(paged.ends_with(" LIMIT 10, 5;"));

    let unlimited = qb::select("t")
        .conditions(w)
        .options(QueryOptions::new().offset(10))
        .to_sql();
    assert_eq!(unlimited, "SELECT * FROM `t` WHERE `user_id` = ?;");
}

#[test]
fn test_select_columns() {
    let sql = qb::select("oauth_tokens")
        .options(QueryOptions::new().columns([
            "user_id",
            "access_token_expires_at",
            "refresh_token_expires_at",
        ]))
        .to_sql();
    assert_eq!(
        sql,
        "SELECT `user_id`, `access_token_expires_at`, `refresh_token_expires_at` FROM `oauth_tokens`;"
    );

    let sql = qb::select("app.users")
        .options(QueryOptions::new().column("email"))
        .to_sql();
    assert_eq!(sql, "SELECT `email` FROM `app`.`users`;");
}

#[test]
fn test_insert_basic() {
    let stmt = qb::insert("users")
        .set("username", "alice")
        .set("email", "alice@example.com")
        .build()
        .unwrap();

    assert_eq!(
        stmt.sql,
        "INSERT INTO `users`(`email`, `username`) VALUES(?, ?)"
    );
    assert_eq!(
        stmt.params,
        vec![
            Scalar::Text("alice@example.com".into()),
            Scalar::Text("alice".into())
        ]
    );
}

#[test]
fn test_insert_row_set_form() {
    let stmt = qb::insert_row("users")
        .data(ValueMap::new().with("email", "a@b.com"))
        .build()
        .unwrap();

    assert_eq!(stmt.sql, "INSERT INTO users SET `email` = ?;");
    assert_eq!(stmt.params, vec![Scalar::Text("a@b.com".into())]);
}

#[test]
fn test_insert_requires_data() {
    let err = qb::insert("users").build().unwrap_err();
    assert!(matches!(err, crate::OrmError::Validation(_)));
    assert!(qb::insert_row("users").build().is_err());
}

#[test]
fn test_update_basic() {
    let stmt = qb::update("users")
        .set("status", "inactive")
        .set("profile", json!({"theme": "dark"}))
        .condition("id", 1i64)
        .build()
        .unwrap();

    assert_eq!(
        stmt.sql,
        "UPDATE `users` SET `profile` = ?, `status` = ? WHERE `id` = ?;"
    );
    assert_eq!(
        stmt.params,
        vec![
            Scalar::Text(r#"{"theme":"dark"}"#.into()),
            Scalar::Text("inactive".into()),
            Scalar::Int(1)
        ]
    );
}

#[test]
fn test_update_limit_has_no_offset() {
    let sql = qb::update("users")
        .set("status", Value::Null)
        .condition("id", 3)
        .options(QueryOptions::new().order("id").limit(1).offset(20))
        .to_sql();
    assert_eq!(
        sql,
        "UPDATE `users` SET `status` = NULL WHERE `id` = ? ORDER BY id LIMIT 1;"
    );
}

#[test]
fn test_update_requires_data() {
    assert!(qb::update("users").condition("id", 1).build().is_err());
}

#[test]
fn test_delete_basic() {
    let stmt = qb::delete("users").condition("id", 1i64).build().unwrap();
    assert_eq!(stmt.sql, "DELETE FROM `users` WHERE `id` = ?;");
    assert_eq!(stmt.params, vec![Scalar::Int(1)]);
}

#[test]
fn test_delete_order_limit() {
    let sql = qb::delete("sessions")
        .condition("expired", true)
        .order("created_at")
        .limit(100)
        .to_sql();
    assert_eq!(
        sql,
        "DELETE FROM `sessions` WHERE `expired` = ? ORDER BY created_at LIMIT 100;"
    );
}

#[test]
fn test_placeholders_match_params_everywhere() {
    let data = ValueMap::new()
        .with("a", 1)
        .with("b", Value::Null)
        .with("c", json!({"x": [1, 2]}));
    let cond = ValueMap::new()
        .with("d", vec!["p", "q"])
        .with("e", Value::Null)
        .with("f", 2.5);

    let statements = [
        qb::select("t").conditions(cond.clone()).build().unwrap(),
        qb::insert("t").data(data.clone()).build().unwrap(),
        qb::insert_row("t").data(data.clone()).build().unwrap(),
        qb::update("t")
            .data(data)
            .conditions(cond.clone())
            .build()
            .unwrap(),
        qb::delete("t").conditions(cond).build().unwrap(),
    ];

    for stmt in statements {
        assert_eq!(stmt.sql.matches('?').count(), stmt.params.len(), "{}", stmt.sql);
    }
}

#[test]
fn test_build_is_repeatable() {
    let data = ValueMap::new().with("z", Value::Null).with("a", "x");
    let qb = qb::update("t").data(data).condition("id", 1);
    assert_eq!(qb.build().unwrap(), qb.build().unwrap());
}

use super::*;
use crate::value::Scalar;

#[test]
fn test_query_type_detection() {
    assert_eq!(
        QueryType::from_sql("SELECT * FROM `users`;"),
        QueryType::Select
    );
    assert_eq!(
        QueryType::from_sql("  select * FROM users"),
        QueryType::Select
    );
    assert_eq!(
        QueryType::from_sql("(SELECT 1) UNION (SELECT 2)"),
        QueryType::Select
    );
    assert_eq!(
        QueryType::from_sql("INSERT INTO `users`(`name`) VALUES(?)"),
        QueryType::Insert
    );
    assert_eq!(
        QueryType::from_sql("REPLACE INTO users SET `id` = ?"),
        QueryType::Insert
    );
    assert_eq!(
        QueryType::from_sql("UPDATE `users` SET `name` = ?;"),
        QueryType::Update
    );
    assert_eq!(
        QueryType::from_sql("DELETE FROM `users` WHERE `id` = ?;"),
        QueryType::Delete
    );
    assert_eq!(
        QueryType::from_sql("CREATE TABLE users (id INT)"),
        QueryType::Other
    );
    assert_eq!(QueryType::from_sql(""), QueryType::Other);
}

#[test]
fn test_context_carries_params() {
    let params = [Scalar::Int(1), Scalar::Text("a".into())];
    let ctx = QueryContext::new("UPDATE t SET a = ? WHERE b = ?", &params);
    assert_eq!(ctx.query_type, QueryType::Update);
    assert_eq!(ctx.params.len(), 2);
}

#[test]
fn test_truncate_sql_bytes_respects_char_boundary() {
    assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
    assert_eq!(truncate_sql_bytes("SELECT 1", 6), "SELECT");
    // 'é' is two bytes; cutting inside it backs off to the boundary.
    assert_eq!(truncate_sql_bytes("aé", 2), "a");
}

#[test]
fn test_tracing_hook_truncation() {
    let hook = TracingSqlHook::new().max_sql_length(10);
    assert_eq!(hook.truncate_sql("SELECT * FROM users"), "SELECT * F...");
    assert_eq!(hook.truncate_sql("SELECT 1"), "SELECT 1");

    let hook = hook.no_truncate();
    assert_eq!(hook.truncate_sql("SELECT * FROM users"), "SELECT * FROM users");
}

#[test]
fn test_tracing_hook_never_aborts() {
    let hook = TracingSqlHook::default();
    let ctx = QueryContext::new("DELETE FROM t;", &[]);
    assert_eq!(hook.before_query(&ctx), HookAction::Continue);
}

#[test]
fn test_query_result_display() {
    assert_eq!(QueryResult::Rows(3).to_string(), "3 rows");
    assert_eq!(QueryResult::Affected(1).to_string(), "1 affected");
    assert_eq!(
        QueryResult::Error("boom".into()).to_string(),
        "error: boom"
    );
}

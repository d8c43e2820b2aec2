//! SET / column-list builders for INSERT and UPDATE.

use crate::ident::escape_id;
use crate::qb::param::ParamList;
use crate::value::ValueMap;

/// Comma-joined `` `col` = ? `` assignments and their values.
///
/// NULL values render as `` `col` = NULL `` and bind nothing. List and structured
/// values bind their JSON text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetClause {
    pub sql: String,
    pub params: ParamList,
}

impl SetClause {
    pub fn build(data: &ValueMap) -> Self {
        let mut params = ParamList::new();
        let assignments: Vec<String> = data
            .iter()
            .map(|(column, value)| match value.to_bound() {
                Some(bound) => {
                    params.push(bound);
                    format!("{} = ?", escape_id(column))
                }
                None => format!("{} = NULL", escape_id(column)),
            })
            .collect();

        Self {
            sql: assignments.join(", "),
            params,
        }
    }
}

/// `(`a`, `b`)` / `VALUES(?, NULL)` pieces of an INSERT with explicit columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ColumnValues {
    pub columns: String,
    pub values: String,
    pub params: ParamList,
}

impl ColumnValues {
    pub fn build(data: &ValueMap) -> Self {
        let mut params = ParamList::new();
        let mut columns = Vec::with_capacity(data.len());
        let mut values = Vec::with_capacity(data.len());

        for (column, value) in data {
            columns.push(escape_id(column));
            match value.to_bound() {
                Some(bound) => {
                    params.push(bound);
                    values.push("?");
                }
                None => values.push("NULL"),
            }
        }

        Self {
            columns: columns.join(", "),
            values: values.join(", "),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Scalar, Value};

    #[test]
    fn set_null_and_scalar() {
        let data = ValueMap::new().with("nickname", Value::Null).with("email", "a@b.com");
        let first = SetClause::build(&data);
        let second = SetClause::build(&data);

        assert_eq!(first.sql, "`email` = ?, `nickname` = NULL");
        assert_eq!(first.params.as_slice(), [Scalar::Text("a@b.com".into())]);
        assert_eq!(first, second);
    }

    #[test]
    fn set_list_binds_json_text() {
        let data = ValueMap::new().with("tags", vec!["a", "b"]);
        let set = SetClause::build(&data);
        assert_eq!(set.sql, "`tags` = ?");
        assert_eq!(set.params.as_slice(), [Scalar::Text(r#"["a","b"]"#.into())]);
    }

    #[test]
    fn column_values_inline_null() {
        let data = ValueMap::new()
            .with("name", "alice")
            .with("age", 30)
            .with("bio", Value::Null);
        let cv = ColumnValues::build(&data);
        assert_eq!(cv.columns, "`age`, `bio`, `name`");
        assert_eq!(cv.values, "?, NULL, ?");
        assert_eq!(
            cv.params.as_slice(),
            [Scalar::Int(30), Scalar::Text("alice".into())]
        );
    }
}

//! Tagged values for condition and data maps.
//!
//! [`Value`] is what callers put into a [`ValueMap`]; [`Scalar`] is what ends up bound to a
//! placeholder. The builders decide the SQL shape from the `Value` case alone:
//!
//! | case         | WHERE                  | SET              |
//! |--------------|------------------------|------------------|
//! | `Null`       | `` `c` IS NULL ``      | `` `c` = NULL `` |
//! | `Scalar`     | `` `c` = ? ``          | `` `c` = ? ``    |
//! | `List`       | `` `c` IN(?, ?) ``     | `` `c` = ? `` (JSON text) |
//! | `Structured` | `` `c` = ? `` (JSON text) | `` `c` = ? `` (JSON text) |

use crate::error::{OrmError, OrmResult};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// A single value bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    fn to_json(&self) -> JsonValue {
        match self {
            Scalar::Int(v) => JsonValue::from(*v),
            Scalar::UInt(v) => JsonValue::from(*v),
            Scalar::Float(v) => JsonValue::from(*v),
            Scalar::Bool(v) => JsonValue::from(*v),
            Scalar::Text(v) => JsonValue::from(v.as_str()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::UInt(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! scalar_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::$variant(<$target>::from(v))
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_from!(Int as i64: i8, i16, i32, i64);
scalar_from!(UInt as u64: u8, u16, u32, u64);
scalar_from!(Float as f64: f32, f64);
scalar_from!(Bool as bool: bool);
scalar_from!(Text as String: String, &str, &String, char);

/// A value in a condition or data map.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// A single bindable value.
    Scalar(Scalar),
    /// An ordered sequence; becomes an `IN(...)` list in WHERE.
    List(Vec<Scalar>),
    /// Nested data; bound as its compact JSON encoding.
    Structured(JsonValue),
}

impl Value {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The value bound for a single `= ?` placeholder, or `None` for NULL.
    ///
    /// Lists and structured values collapse to their JSON text.
    pub(crate) fn to_bound(&self) -> Option<Scalar> {
        match self {
            Value::Null => None,
            Value::Scalar(s) => Some(s.clone()),
            Value::List(items) => {
                let json = JsonValue::Array(items.iter().map(Scalar::to_json).collect());
                Some(Scalar::Text(json.to_string()))
            }
            Value::Structured(json) => Some(Scalar::Text(json.to_string())),
        }
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Value::Scalar(v.into()),
            None => Value::Null,
        }
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => Value::Scalar(number_to_scalar(&n)),
            JsonValue::String(s) => Value::Scalar(Scalar::Text(s)),
            JsonValue::Array(items) => Value::List(items.into_iter().map(json_to_scalar).collect()),
            obj @ JsonValue::Object(_) => Value::Structured(obj),
        }
    }
}

fn number_to_scalar(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::UInt(u)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn json_to_scalar(json: JsonValue) -> Scalar {
    match json {
        JsonValue::Bool(b) => Scalar::Bool(b),
        JsonValue::Number(n) => number_to_scalar(&n),
        JsonValue::String(s) => Scalar::Text(s),
        other => Scalar::Text(other.to_string()),
    }
}

/// Column name → value map used for WHERE conditions and INSERT/UPDATE data.
///
/// Keys iterate in lexicographic order, so placeholder order is the same for every
/// build of the same map.
///
/// ```
/// use myorm::{Value, ValueMap};
///
/// let cond = ValueMap::new()
///     .with("status", "active")
///     .with("deleted_at", Value::Null)
///     .with("id", vec![1, 2, 3]);
/// assert_eq!(cond.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap {
    entries: BTreeMap<String, Value>,
}

impl ValueMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry (consuming builder).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(column.into(), value.into())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.get(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.entries.remove(column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Build a map from a JSON object.
    ///
    /// ```
    /// use myorm::ValueMap;
    /// use serde_json::json;
    ///
    /// let data = ValueMap::from_json(json!({"email": "a@b.com", "profile": {"age": 3}})).unwrap();
    /// assert_eq!(data.len(), 2);
    /// ```
    pub fn from_json(json: JsonValue) -> OrmResult<Self> {
        match json {
            JsonValue::Object(obj) => Ok(obj.into_iter().collect()),
            JsonValue::Null => Ok(Self::new()),
            other => Err(OrmError::validation(format!(
                "expected a JSON object for a value map, got {other}"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

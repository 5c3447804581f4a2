//! Structured data attached to a chain link.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A typed value stored in [`Data`].
///
/// Serializes untagged, so a `Value::Int(30)` becomes the JSON number `30`
/// and a `Value::Map` becomes a plain JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

macro_rules! value_from {
    ($variant:ident, $target:ty; $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

value_from!(Int, i64; i8, i16, i32, i64, isize);
value_from!(UInt, u64; u8, u16, u32, u64, usize);
value_from!(Float, f64; f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<Data> for Value {
    fn from(v: Data) -> Self {
        Value::Map(v.0)
    }
}

/// Key/value context attached to a [`ChainError`](crate::ChainError).
///
/// Keys iterate in sorted order; callers should not depend on any order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Data(BTreeMap<String, Value>);

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Data::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Data {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Data(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Build a [`Data`] map from `key => value` pairs.
///
/// ```rust
/// let data = errchain::data! {
///     "server" => "db-server-01",
///     "timeoutSeconds" => 30,
/// };
/// assert_eq!(data.len(), 2);
/// ```
#[macro_export]
macro_rules! data {
    () => {
        $crate::Data::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Data::new()$(.with($key, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(30), Value::Int(30));
        assert_eq!(Value::from(7usize), Value::UInt(7));
        assert_eq!(Value::from("db"), Value::String("db".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn test_value_display() {
        let nested = Data::new().with("a", 1).with("b", vec!["x", "y"]);
        assert_eq!(Value::from(nested).to_string(), "{a: 1, b: [x, y]}");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_data_macro() {
        let data = crate::data! { "id" => 1, "description" => "fool" };
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("id"), Some(&Value::Int(1)));
        assert!(crate::data! {}.is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let mut data = Data::new();
        assert_eq!(data.insert("k", 1), None);
        assert_eq!(data.insert("k", 2), Some(Value::Int(1)));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let data: Data = [("a", 1), ("b", 2)].into_iter().collect();
        let keys: Vec<&str> = data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}

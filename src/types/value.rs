//! This module defines the canonical, dynamically-tagged value representation
//! used throughout the riffle pipeline.
//!
//! A single pipeline can carry integers, text, booleans, nested sequences,
//! records, and first-class functions — and a `reduce` accumulator may change
//! kind mid-stream — so elements are modeled as one tagged enum rather than a
//! generic parameter threaded through the operation log.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A first-class function value. Compared by identity, never by behavior.
pub type NativeFn = Rc<dyn Fn(Value) -> Value>;

/// The canonical element representation of a riffle pipeline.
#[derive(Clone)]
pub enum Value {
    /// The unit/absent value. Deliberately has no zero value in the defaults
    /// table.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// An ordered sequence. The only kind `flatten` descends into.
    Seq(Vec<Value>),
    /// A composite of named fields.
    Record(BTreeMap<String, Value>),
    Func(NativeFn),
}

/// The kind tag of a `Value`, used as the key of the zero-value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Seq,
    Record,
    Func,
}

impl Value {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Seq(_) => ValueKind::Seq,
            Value::Record(_) => ValueKind::Record,
            Value::Func(_) => ValueKind::Func,
        }
    }

    /// Wraps a native closure as a function value.
    pub fn func(f: impl Fn(Value) -> Value + 'static) -> Self {
        Value::Func(Rc::new(f))
    }

    /// Builds a sequence value from anything convertible to elements.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a record value from `(key, value)` pairs.
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric accessor covering both numeric kinds; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }
}

//==================================================================================
// Conversions
//==================================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Record(fields)
    }
}

//==================================================================================
// Equality & Formatting
//==================================================================================

/// Values compare structurally, except functions which compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Value::Record(fields) => f.debug_tuple("Record").field(fields).finish(),
            Value::Func(_) => write!(f, "Func(<native>)"),
        }
    }
}

/// Provides the canonical lowercase name for a `ValueKind`.
///
/// These names are part of the public contract: they appear in error messages
/// raised by the zero-value table.
impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Str => "text",
            ValueKind::Seq => "sequence",
            ValueKind::Record => "record",
            ValueKind::Func => "function",
        };
        write!(f, "{}", name)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_match_variants() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Int(7).kind(), ValueKind::Int);
        assert_eq!(Value::Float(1.5).kind(), ValueKind::Float);
        assert_eq!(Value::from("hi").kind(), ValueKind::Str);
        assert_eq!(Value::seq([1, 2]).kind(), ValueKind::Seq);
        assert_eq!(Value::record([("a", 1)]).kind(), ValueKind::Record);
        assert_eq!(Value::func(|v| v).kind(), ValueKind::Func);
    }

    #[test]
    fn test_nested_vec_conversion() {
        let nested = Value::from(vec![vec![1, 2], vec![3]]);
        assert_eq!(
            nested,
            Value::Seq(vec![Value::seq([1, 2]), Value::seq([3])])
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Value::seq([1, 2, 3]), Value::seq([1, 2, 3]));
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_eq!(
            Value::record([("k", "v")]),
            Value::record([("k", "v")])
        );
    }

    #[test]
    fn test_function_values_compare_by_identity() {
        let f = Value::func(|v| v);
        let g = Value::func(|v| v);
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
    }

    #[test]
    fn test_numeric_accessor_widens_integers() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::from("3").as_f64(), None);
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(ValueKind::Str.to_string(), "text");
        assert_eq!(ValueKind::Record.to_string(), "record");
        assert_eq!(ValueKind::Null.to_string(), "null");
    }
}

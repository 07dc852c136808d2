//! The zero-value table: maps an element kind to the kind's zero value.
//!
//! This is the collaborator `reduce` consults when seeding its implicit
//! accumulator from the element stream itself. It is a pure function with no
//! lifecycle beyond a single lookup.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::RiffleError;
use crate::types::value::{Value, ValueKind};

/// Returns the zero value for an element kind.
///
/// Every kind with a sensible zero yields one: numeric kinds seed as zero,
/// text as the empty string, booleans as `false`, sequences and records as
/// their empty forms, functions as a no-op. `Null` has no sensible zero and
/// fails fast instead of silently producing an arbitrary seed.
pub fn zero_value(kind: ValueKind) -> Result<Value, RiffleError> {
    match kind {
        ValueKind::Bool => Ok(Value::Bool(false)),
        ValueKind::Int => Ok(Value::Int(0)),
        ValueKind::Float => Ok(Value::Float(0.0)),
        ValueKind::Str => Ok(Value::Str(String::new())),
        ValueKind::Seq => Ok(Value::Seq(Vec::new())),
        ValueKind::Record => Ok(Value::Record(BTreeMap::new())),
        ValueKind::Func => Ok(Value::Func(Rc::new(|_| Value::Null))),
        ValueKind::Null => Err(RiffleError::UnsupportedDefault(
            "element kind 'null' has no zero value".to_string(),
        )),
    }
}

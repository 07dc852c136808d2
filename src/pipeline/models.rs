// In: src/pipeline/models.rs

//! Defines the recorded operation descriptors that make up a pipeline's
//! operation log, and the serializable shape summary derived from them.
//!
//! A descriptor is a tagged variant holding the caller-supplied function and,
//! for the accumulating operations, the accumulator slot the executor rewrites
//! in place after each element. Descriptors record structure only; nothing
//! here touches data.

use serde::{Deserialize, Serialize};

use crate::error::RiffleError;
use crate::types::Value;

// A const for the shape version, ensuring consistency.
pub(crate) const SHAPE_VERSION: u32 = 1;

pub(crate) type MapFn = Box<dyn FnMut(Value) -> Value>;
pub(crate) type PredicateFn = Box<dyn FnMut(&Value) -> bool>;
pub(crate) type AccumulateFn = Box<dyn FnMut(Value, Value) -> Value>;
pub(crate) type TapFn = Box<dyn FnMut(&Value)>;

/// One recorded operation. Insertion order in the log is application order.
pub(crate) enum Op {
    /// Replaces the element with the function's result.
    Map(MapFn),
    /// Discards elements the predicate rejects.
    Filter(PredicateFn),
    /// Terminal: folds every surviving element into one accumulator, seeded
    /// from the caller-supplied initial value.
    Fold { f: AccumulateFn, acc: Value },
    /// Terminal: like `Fold`, but the seed comes from the element stream —
    /// the first surviving element is combined with its kind's zero value.
    /// `None` until the first element arrives.
    Reduce { f: AccumulateFn, acc: Option<Value> },
    /// Replaces each element with the running accumulator.
    Scan { f: AccumulateFn, acc: Value },
    /// Expands nested-sequence elements up to `depth` levels. Multiple
    /// entries add their depths at execution time.
    Flatten { depth: usize },
    /// Side-effecting pass-through; the element is unchanged.
    Tap(TapFn),
}

impl Op {
    /// Returns `true` for the operations that collapse the pipeline into a
    /// single aggregate.
    pub(crate) fn is_terminal(&self) -> bool {
        matches!(self, Op::Fold { .. } | Op::Reduce { .. })
    }

    pub(crate) fn tag(&self) -> OpTag {
        match self {
            Op::Map(_) => OpTag::Map,
            Op::Filter(_) => OpTag::Filter,
            Op::Fold { .. } => OpTag::Fold,
            Op::Reduce { .. } => OpTag::Reduce,
            Op::Scan { .. } => OpTag::Scan,
            Op::Flatten { depth } => OpTag::Flatten { depth: *depth },
            Op::Tap(_) => OpTag::Tap,
        }
    }
}

//==================================================================================
// Serializable Shape
//==================================================================================

/// The data-free tag of a recorded operation, for introspection and logging.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OpTag {
    Map,
    Filter,
    Fold,
    Reduce,
    Scan,
    Flatten { depth: usize },
    Tap,
}

/// A serializable summary of a recorded, not-yet-executed pipeline: the
/// ordered operation tags plus the window fields and terminal marker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PipelineShape {
    pub shape_version: u32,
    pub ops: Vec<OpTag>,
    pub skip: usize,
    pub take: Option<usize>,
    pub terminal: bool,
}

impl PipelineShape {
    /// Serializes the shape to its canonical JSON form.
    pub fn to_json(&self) -> Result<String, RiffleError> {
        Ok(serde_json::to_string(self)?)
    }
}

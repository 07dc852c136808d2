// In: src/pipeline/builder.rs

//! The chainable builder over the operation log.
//!
//! Builder calls are purely structural: each one appends a descriptor to the
//! log (or sets a window field) and returns a handle typed to reflect the new
//! pipeline shape. `Pipeline` is the element-wise handle; a terminal call
//! (`fold`/`reduce`) consumes it and returns `Reduced`, which exposes only
//! `collect` — further chaining on a collapsed pipeline is a compile error,
//! not a runtime one.

use crate::error::RiffleError;
use crate::pipeline::executor::{self, ExecutionOutput};
use crate::pipeline::models::{Op, PipelineShape, SHAPE_VERSION};
use crate::types::Value;

/// Creates a pipeline over a finite source sequence.
///
/// The source is materialized into owned `Value`s once, up front; recording
/// operations never touches it again until `collect`.
pub fn pipeline<I>(source: I) -> Pipeline
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Pipeline {
        source: source.into_iter().map(Into::into).collect(),
        ops: Vec::new(),
        skip: 0,
        take: None,
    }
}

/// Entry point as a method on the collection itself: `vec.pipeline()`.
pub trait IntoPipeline {
    fn pipeline(self) -> Pipeline;
}

impl<I> IntoPipeline for I
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    fn pipeline(self) -> Pipeline {
        pipeline(self)
    }
}

/// A handle binding a source sequence to a recorded, not-yet-executed
/// operation log.
pub struct Pipeline {
    source: Vec<Value>,
    ops: Vec<Op>,
    skip: usize,
    take: Option<usize>,
}

/// A pipeline that has recorded a terminal operation. Only `collect` (and
/// read-only introspection) remain available.
pub struct Reduced {
    inner: Pipeline,
}

impl Pipeline {
    /// Records a transform; each element is replaced with `f`'s result.
    pub fn map(mut self, f: impl FnMut(Value) -> Value + 'static) -> Self {
        self.ops.push(Op::Map(Box::new(f)));
        self
    }

    /// Records a selection; elements rejected by `f` are discarded.
    pub fn filter(mut self, f: impl FnMut(&Value) -> bool + 'static) -> Self {
        self.ops.push(Op::Filter(Box::new(f)));
        self
    }

    /// Records a running accumulation: each element is replaced with the
    /// accumulator after folding the element in.
    pub fn scan(
        mut self,
        f: impl FnMut(Value, Value) -> Value + 'static,
        initial: impl Into<Value>,
    ) -> Self {
        self.ops.push(Op::Scan {
            f: Box::new(f),
            acc: initial.into(),
        });
        self
    }

    /// Records a side-effecting observer; elements pass through unchanged.
    pub fn tap(mut self, f: impl FnMut(&Value) + 'static) -> Self {
        self.ops.push(Op::Tap(Box::new(f)));
        self
    }

    /// Records a one-level expansion of nested-sequence elements.
    pub fn flatten(self) -> Self {
        self.flatten_depth(1)
    }

    /// Records an expansion of nested-sequence elements up to `depth` levels.
    /// Depths of repeated calls add.
    pub fn flatten_depth(mut self, depth: usize) -> Self {
        self.ops.push(Op::Flatten { depth });
        self
    }

    /// Bounds the traversal to the first `many` elements of the window.
    /// Clamped into `[0, len]` immediately; the last call wins.
    pub fn take(mut self, many: isize) -> Self {
        self.take = Some(clamp_window(many, self.source.len()));
        self
    }

    /// Skips the first `many` source elements. Clamped into `[0, len]`
    /// immediately; the last call wins.
    pub fn skip(mut self, many: isize) -> Self {
        self.skip = clamp_window(many, self.source.len());
        self
    }

    /// Records the terminal fold, collapsing the pipeline into one aggregate
    /// seeded from `initial`.
    pub fn fold(
        mut self,
        f: impl FnMut(Value, Value) -> Value + 'static,
        initial: impl Into<Value>,
    ) -> Reduced {
        self.ops.push(Op::Fold {
            f: Box::new(f),
            acc: initial.into(),
        });
        Reduced { inner: self }
    }

    /// Records the terminal reduction, collapsing the pipeline into one
    /// aggregate seeded from the element stream itself: the first surviving
    /// element is combined with its kind's zero value.
    pub fn reduce(mut self, f: impl FnMut(Value, Value) -> Value + 'static) -> Reduced {
        self.ops.push(Op::Reduce {
            f: Box::new(f),
            acc: None,
        });
        Reduced { inner: self }
    }

    /// Returns the serializable summary of the recorded log and window.
    pub fn shape(&self) -> PipelineShape {
        shape_of(self)
    }

    /// Materializes the pipeline in a single pass over the source.
    pub fn collect(self) -> Result<Vec<Value>, RiffleError> {
        let Pipeline {
            source,
            mut ops,
            skip,
            take,
        } = self;
        match executor::run(source, &mut ops, skip, take)? {
            ExecutionOutput::Sequence(items) => Ok(items),
            ExecutionOutput::Aggregate(_) => Err(RiffleError::InternalError(
                "element-wise pipeline produced an aggregate".to_string(),
            )),
        }
    }
}

impl Reduced {
    /// Returns the serializable summary of the recorded log and window.
    pub fn shape(&self) -> PipelineShape {
        shape_of(&self.inner)
    }

    /// Materializes the terminal aggregate in a single pass over the source.
    pub fn collect(self) -> Result<Value, RiffleError> {
        let Pipeline {
            source,
            mut ops,
            skip,
            take,
        } = self.inner;
        match executor::run(source, &mut ops, skip, take)? {
            ExecutionOutput::Aggregate(value) => Ok(value),
            ExecutionOutput::Sequence(_) => Err(RiffleError::InternalError(
                "collapsed pipeline produced an element sequence".to_string(),
            )),
        }
    }
}

fn clamp_window(requested: isize, len: usize) -> usize {
    if requested <= 0 {
        0
    } else {
        (requested as usize).min(len)
    }
}

fn shape_of(p: &Pipeline) -> PipelineShape {
    PipelineShape {
        shape_version: SHAPE_VERSION,
        ops: p.ops.iter().map(Op::tag).collect(),
        skip: p.skip,
        take: p.take,
        terminal: p.ops.last().is_some_and(Op::is_terminal),
    }
}

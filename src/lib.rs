//! This file is the root of the `riffle` crate.
//!
//! riffle is a lazy, chainable sequence-transformation engine: a caller wraps
//! a finite ordered sequence, composes deferred operations (map, filter,
//! fold, reduce, scan, windowing, flattening, tap), and materializes the
//! result in a single pass with `collect`. Nothing touches data until then.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod error;
pub mod pipeline;
pub mod types;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use error::RiffleError;
pub use pipeline::builder::{pipeline, IntoPipeline, Pipeline, Reduced};
pub use pipeline::models::{OpTag, PipelineShape};
pub use types::{zero_value, NativeFn, Value, ValueKind};

//! This module defines the dynamic value model used throughout the riffle
//! pipeline.
//!
//! It includes the canonical `Value` enum — the single element representation
//! carried through every recorded operation — together with its `ValueKind`
//! tag and the zero-value table consulted by `reduce` when seeding an
//! implicit accumulator.

pub mod defaults;
pub mod value;

// Re-export the main types for easier access.
pub use defaults::zero_value;
pub use value::{NativeFn, Value, ValueKind};

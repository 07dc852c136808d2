// In: src/error.rs

//! This module defines the single, unified error type for the entire riffle library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiffleError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// A `reduce` needed an implicit accumulator seed and none could be
    /// produced: either the element kind has no zero value, or the traversal
    /// was empty and left the kind unresolvable.
    #[error("Unsupported default seed: {0}")]
    UnsupportedDefault(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, raised during shape serialization.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

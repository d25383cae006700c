use thiserror::Error;

/// Crate-wide error type for graph construction and network forward passes.
///
/// All operators are total over floats (NaN/infinity follow native `f64`
/// semantics and are not errors); the fallible surface is limited to
/// structural misuse.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Graph mismatch during operation '{operation}': operands belong to different graphs")]
    GraphMismatch { operation: String },

    #[error("Arity mismatch during operation '{operation}': expected {expected} inputs, got {actual}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },
}

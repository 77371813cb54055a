//! Error types for transformer construction.
//!
//! Only construction can fail: building a transformer is where primaries are
//! checked and matrices inverted. The conversion entry points themselves are
//! infallible; out-of-domain numeric inputs propagate as IEEE NaN/Inf by
//! design.

use thiserror::Error;

/// Transformer construction error.
///
/// Every variant indicates a configuration mistake (bad reference data or a
/// degenerate working space), not a runtime data problem.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The working space's primaries are collinear or otherwise degenerate.
    #[error("degenerate primaries for working space {0}")]
    DegeneratePrimaries(&'static str),

    /// The combined forward matrix is singular and cannot be inverted.
    #[error("singular transform matrix for working space {0}")]
    SingularMatrix(&'static str),

    /// The adaptation cone-response matrix is singular.
    #[error("singular adaptation cone-response matrix")]
    SingularAdaptation,
}

/// Result type for transformer construction.
pub type TransformResult<T> = Result<T, TransformError>;

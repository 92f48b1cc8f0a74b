use thiserror::Error;

/// Error type for all geometric computations in the toolkit.
///
/// Every variant is a precondition violation raised synchronously at the
/// point of detection; nothing is retried internally. The CAD command layer
/// is expected to catch these at its boundary and report to the user.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A vector-only operation received a bound point operand.
    #[error("{operation} requires vector operands, got a point")]
    InvalidOperand { operation: &'static str },

    /// Matrix arithmetic with incompatible dimensions.
    #[error("matrix shape mismatch: {rows_a}x{cols_a} vs {rows_b}x{cols_b}")]
    ShapeMismatch {
        rows_a: usize,
        cols_a: usize,
        rows_b: usize,
        cols_b: usize,
    },

    /// Inverse of a non-square or non-invertible matrix.
    #[error("matrix is singular or not square")]
    SingularMatrix,

    /// Row/column or grid index outside the valid range.
    #[error("index {index} is out of range [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Input the algorithm cannot meaningfully operate on.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

// src/numerics/types/error.rs
// Error taxonomy for matrix construction and linear-algebra operations.

/// Errors that can occur while building or operating on a matrix.
///
/// Every variant except [`MatrixError::Singular`] describes malformed input
/// (a shape problem); see [`MatrixError::is_shape_error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("Value count mismatch: a {rows}x{cols} matrix needs {expected} values, got {actual}")]
    ValueCount {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Dimension overflow: {rows}x{cols} cells do not fit in usize")]
    DimensionOverflow { rows: usize, cols: usize },

    #[error("Incompatible shapes: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    IncompatibleShapes {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("Not square: a {rows}x{cols} matrix has no {operation}")]
    NotSquare {
        rows: usize,
        cols: usize,
        operation: &'static str,
    },

    #[error("Empty matrix: a 0x0 matrix has no {operation}")]
    Empty { operation: &'static str },

    #[error("Order limit exceeded: cofactor expansion of order {order} is above the limit of {limit}")]
    OrderLimitExceeded { order: usize, limit: usize },

    #[error("Singular matrix: determinant is zero, no inverse exists")]
    Singular,
}

impl MatrixError {
    /// True for malformed-input errors, false when the input was well formed
    /// but has no inverse.
    pub fn is_shape_error(&self) -> bool {
        !matches!(self, MatrixError::Singular)
    }
}

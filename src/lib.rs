//! geom3: minimal 3D geometry toolkit
//!
//! Directions (free vectors), points (base position + directional offset),
//! dense matrices, and homogeneous-coordinate transform helpers.
//!
//! Everything is a plain immutable value; operations return new values and
//! report failures through [`GeomError`] rather than panicking or letting
//! NaN/Infinity leak through silently.

pub mod geom;
pub mod matrix;
pub mod precision;
pub mod transform;

// Re-exports for convenience
pub use geom::{Direction, Point};
pub use matrix::Matrix;
pub use transform::{
    apply_direction, apply_point, compose, invert, rotation_x, rotation_y, rotation_z, scaling,
    translation,
};

/// Result type for geom3 operations
pub type Result<T> = std::result::Result<T, GeomError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    /// Scalar division or normalization with a zero divisor, or
    /// dehomogenization with w at zero. Zero-handling policy for the whole
    /// crate: a typed error, never silent NaN/Infinity propagation.
    #[error("division by zero in {0}")]
    DivisionByZero(String),

    /// Matrix operands whose shapes do not admit the requested operation.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Non-rectangular row input to a matrix constructor.
    #[error("ragged rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Matrix is not invertible: pivot magnitude fell below
    /// [`precision::SINGULAR`].
    #[error("singular matrix: pivot magnitude {pivot:e} below tolerance")]
    Singular { pivot: f64 },
}

//! Precision constants for geometric comparisons.
//!
//! Two different concerns live here: geometric coincidence (is this vector
//! effectively zero-length?) and numerical singularity (is this pivot
//! effectively zero during elimination?). They carry different tolerances.

/// Confusion tolerance for coincidence checks in real space.
/// A magnitude or divisor at or below this value is treated as zero by
/// `Direction::divided` and `Direction::normalized`.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Square of CONFUSION for squared-distance comparisons.
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;

/// Angular tolerance for checking equality of angles (radians).
/// Value: 1.0e-12
pub const ANGULAR: f64 = 1.0e-12;

/// Pivot magnitude below which a matrix is treated as non-invertible
/// during Gauss-Jordan elimination.
/// Value: 1.0e-12
pub const SINGULAR: f64 = 1.0e-12;

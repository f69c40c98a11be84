//! Homogeneous-coordinate transform helpers.
//!
//! Transforms are ordinary 4x4 [`Matrix`] values over homogeneous
//! coordinates (x, y, z, w), so arbitrary chains reduce to a single matrix
//! through [`Matrix::multiplied`].
//!
//! Convention: column vectors on the right. A transform maps v to M * v,
//! the translation components live in the last column, and
//! [`compose`] multiplies left-to-right, so in `compose(&[a, b])` the
//! transform `b` applies to a vector first and `a` second.
//!
//! Points are promoted with w = 1 and dehomogenized after the multiply;
//! free directions are promoted with w = 0 so the translation column
//! cannot touch them.

use crate::geom::{Direction, Point};
use crate::matrix::Matrix;
use crate::precision;
use crate::{GeomError, Result};

/// Translation by (dx, dy, dz).
pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix {
    Matrix::from([
        [1.0, 0.0, 0.0, dx],
        [0.0, 1.0, 0.0, dy],
        [0.0, 0.0, 1.0, dz],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Scaling by (sx, sy, sz).
pub fn scaling(sx: f64, sy: f64, sz: f64) -> Matrix {
    Matrix::from([
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [0.0, 0.0, sz, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation around the X axis (angle in radians).
pub fn rotation_x(theta: f64) -> Matrix {
    let c = theta.cos();
    let s = theta.sin();
    Matrix::from([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation around the Y axis (angle in radians).
pub fn rotation_y(theta: f64) -> Matrix {
    let c = theta.cos();
    let s = theta.sin();
    Matrix::from([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Right-handed rotation around the Z axis (angle in radians).
pub fn rotation_z(theta: f64) -> Matrix {
    let c = theta.cos();
    let s = theta.sin();
    Matrix::from([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Folds a chain of transforms into one matrix, left-to-right.
///
/// The rightmost transform applies to a vector first. The empty chain is
/// the identity. Fails with `ShapeMismatch` if any element is not 4x4.
pub fn compose(transforms: &[Matrix]) -> Result<Matrix> {
    let mut result = Matrix::identity(4);
    for t in transforms {
        ensure_transform(t)?;
        result = result.multiplied(t)?;
    }
    Ok(result)
}

/// Inverts a transform.
///
/// General Gauss-Jordan inverse; fails with `Singular` when the matrix is
/// not invertible within [`precision::SINGULAR`], and `ShapeMismatch` when
/// it is not 4x4.
pub fn invert(t: &Matrix) -> Result<Matrix> {
    ensure_transform(t)?;
    t.inverted()
}

/// Applies a transform to a point.
///
/// The point's resolved position is promoted with w = 1, multiplied, and
/// dehomogenized by dividing by the resulting w. Fails with
/// `DivisionByZero` when the resulting w is at zero. The result carries
/// the transformed position as its base, with a zero offset.
pub fn apply_point(t: &Matrix, p: &Point) -> Result<Point> {
    ensure_transform(t)?;
    let pos = p.position();
    let r = multiply_homogeneous(t, pos.x, pos.y, pos.z, 1.0);
    let w = r[3];
    if w.abs() <= precision::CONFUSION {
        return Err(GeomError::DivisionByZero("transform::apply_point".into()));
    }
    Ok(Point::from_position(Direction::new(
        r[0] / w,
        r[1] / w,
        r[2] / w,
    )))
}

/// Applies a transform to a free direction.
///
/// The direction is promoted with w = 0, so the translation column has no
/// effect; under affine transforms w stays 0 and no dehomogenization is
/// needed.
pub fn apply_direction(t: &Matrix, d: &Direction) -> Result<Direction> {
    ensure_transform(t)?;
    let r = multiply_homogeneous(t, d.x, d.y, d.z, 0.0);
    Ok(Direction::new(r[0], r[1], r[2]))
}

fn ensure_transform(t: &Matrix) -> Result<()> {
    if t.rows() != 4 || t.cols() != 4 {
        return Err(GeomError::ShapeMismatch(format!(
            "expected a 4x4 transform, got {}x{}",
            t.rows(),
            t.cols()
        )));
    }
    Ok(())
}

fn multiply_homogeneous(t: &Matrix, x: f64, y: f64, z: f64, w: f64) -> [f64; 4] {
    let v = [x, y, z, w];
    let mut result = [0.0; 4];
    for (i, out) in result.iter_mut().enumerate() {
        for (j, component) in v.iter().enumerate() {
            *out += t.value(i, j) * component;
        }
    }
    result
}

//! Positional entity: base position plus directional offset.

use super::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A position in 3D space, expressed as a base position plus a
/// [`Direction`] offset from it.
///
/// The `dot` product of two points reads only their offset components;
/// the bases never enter it. Affine arithmetic (`point - point`,
/// `point + direction`) works on the resolved positions instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub base: Direction,
    pub direction: Direction,
}

impl Point {
    /// Creates a point from a base position and an offset from it.
    #[inline]
    pub const fn new(base: Direction, direction: Direction) -> Self {
        Self { base, direction }
    }

    /// Creates a point at the origin with no offset.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(Direction::zero(), Direction::zero())
    }

    /// Creates a point at the given position (zero offset).
    #[inline]
    pub const fn from_position(position: Direction) -> Self {
        Self::new(position, Direction::zero())
    }

    /// Returns the resolved position: base + offset.
    #[inline]
    pub fn position(&self) -> Direction {
        self.base.added(&self.direction)
    }

    /// Computes the dot product of the two points' offset components.
    /// The base positions are never read.
    #[inline]
    pub const fn dot(&self, other: &Point) -> f64 {
        self.direction.dot(&other.direction)
    }
}

impl Add<Direction> for Point {
    type Output = Point;
    /// Offsets the point by a vector. The base stays put; the offset
    /// component absorbs the displacement.
    fn add(self, d: Direction) -> Point {
        Point::new(self.base, self.direction.added(&d))
    }
}

impl Sub for Point {
    type Output = Direction;
    /// Vector from the other point's resolved position to this one's.
    fn sub(self, other: Point) -> Direction {
        self.position().subtracted(&other.position())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.base, self.direction)
    }
}

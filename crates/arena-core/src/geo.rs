//! Integer field geometry.
//!
//! The field is the closed rectangle `[0, max_x] × [0, max_y]`.  Distances
//! are compared squared so no square root is ever taken.

use std::fmt;

/// A point on the field.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Widened to `i64` so it cannot overflow
    /// for any pair of `i32` coordinates.
    #[inline]
    pub fn distance_sq(self, other: Position) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }

    /// `true` if `other` lies within `distance` (inclusive).
    #[inline]
    pub fn within(self, other: Position, distance: u32) -> bool {
        let d = distance as i64;
        self.distance_sq(other) <= d * d
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive upper bounds of the field; the lower bound is always `0`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// A field spanning `[0, max_x] × [0, max_y]`.
    #[inline]
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    /// `true` if `x` lies in `[0, max_x]`.
    #[inline]
    pub fn contains_x(self, x: i32) -> bool {
        (0..=self.max_x).contains(&x)
    }

    /// `true` if `y` lies in `[0, max_y]`.
    #[inline]
    pub fn contains_y(self, y: i32) -> bool {
        (0..=self.max_y).contains(&y)
    }

    /// `true` if both coordinates of `pos` are on the field.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        self.contains_x(pos.x) && self.contains_y(pos.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

//! Closed 1D intervals

use serde::{Deserialize, Serialize};

use crate::vector2::Vector2;

/// Closed range `[start, end]` on the real line
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Create a new interval
    #[inline]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Distance between the endpoints
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).abs()
    }

    /// How much the two intervals overlap.
    ///
    /// Sum of the half-lengths minus the distance between centers, i.e. the
    /// separation needed to pull them apart. Positive when they intersect;
    /// zero or negative when they don't. Disjoint intervals short-circuit to
    /// exactly `0.0`.
    pub fn overlap(&self, other: Interval) -> f64 {
        if self.start > other.end || other.start > self.end {
            return 0.0;
        }

        ((self.start - self.end) / 2.0).abs() + ((other.start - other.end) / 2.0).abs()
            - ((self.start + self.end - other.start - other.end) / 2.0).abs()
    }

    /// Whether `value` lies strictly between the endpoints
    #[inline]
    pub fn contains_exclusive(&self, value: f64) -> bool {
        self.start < value && value < self.end
    }

    /// Whether [`Interval::overlap`] is strictly positive
    pub fn overlaps(&self, other: Interval) -> bool {
        self.overlap(other) > 0.0
    }
}

/// Reads `(x, y)` as `[x, y]`
impl From<Vector2> for Interval {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

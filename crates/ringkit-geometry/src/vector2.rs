//! 2D vector value type
//!
//! `Vector2` doubles as a point and a displacement. Every operation returns a
//! new value; operands are never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::angle;
use crate::error::{GeometryError, GeometryResult};

/// 2D vector / point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The origin
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length, without intermediate overflow
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared length (avoids the square root)
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// The vector rotated 90° counter-clockwise: `(-y, x)`
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Unit vector pointing the same way.
    ///
    /// Fails with [`GeometryError::ZeroLength`] for the zero vector and with
    /// [`GeometryError::NonFinite`] if a component is NaN or infinite, rather
    /// than returning a NaN vector.
    pub fn normalize(&self) -> GeometryResult<Self> {
        let len = self.length();
        if !len.is_finite() {
            tracing::debug!(x = self.x, y = self.y, "normalize rejected non-finite vector");
            return Err(GeometryError::NonFinite { op: "normalize" });
        }
        if len == 0.0 {
            tracing::debug!("normalize rejected zero-length vector");
            return Err(GeometryError::ZeroLength);
        }
        Ok(Self::new(self.x / len, self.y / len))
    }

    /// Unit vector, or the zero vector when there is no direction
    pub fn normalize_or_zero(&self) -> Self {
        self.normalize().unwrap_or(Self::ZERO)
    }

    /// Component-wise sum
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: Vector2) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`
    #[inline]
    pub fn subtract(&self, other: Vector2) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Displacement from `self` to `other`, i.e. `other - self`
    #[inline]
    pub fn difference_to(&self, other: Vector2) -> Self {
        other.subtract(*self)
    }

    /// Multiply both components by `scalar`
    #[inline]
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    #[inline]
    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product `x * o.y - y * o.x`
    #[inline]
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Signed angle in radians, in `[-π, π]`: how far `other` must turn
    /// counter-clockwise to reach `self`. Zero if either vector is zero.
    ///
    /// `a.angle_to(b)` is positive when `b` lies clockwise of `a`.
    pub fn angle_to(&self, other: Vector2) -> f64 {
        other.cross(*self).atan2(self.dot(other))
    }

    /// Same angle as [`Vector2::angle_to`], by iterative quadrant correction.
    ///
    /// Returns a value in `(-π/2, 3π/2]`; [`angle::wrap_angle`] maps it onto
    /// `self.angle_to(other)`. Fails on zero-length input.
    pub fn angle_to_iterative(&self, other: Vector2) -> GeometryResult<f64> {
        let a = self.normalize()?;
        let b = other.normalize()?;
        Ok(angle::quadrant_corrected_angle(a, b))
    }

    /// Alias for [`Vector2::add`], reads better when moving a point
    #[inline]
    pub fn translate(&self, delta: Vector2) -> Self {
        self.add(delta)
    }

    /// Rotate about the origin by `angle` radians (counter-clockwise)
    pub fn rotate_about_origin(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotate about `pivot` by `angle` radians (counter-clockwise)
    pub fn rotate(&self, pivot: Vector2, angle: f64) -> Self {
        self.subtract(pivot)
            .rotate_about_origin(angle)
            .translate(pivot)
    }

    /// Uniform scale about `pivot`
    pub fn scale_around(&self, pivot: Vector2, ratio: f64) -> Self {
        self.subtract(pivot).scale(ratio).translate(pivot)
    }

    /// Independent per-axis scale about `pivot`
    pub fn shear(&self, pivot: Vector2, x_ratio: f64, y_ratio: f64) -> Self {
        let local = self.subtract(pivot);
        Self::new(local.x * x_ratio, local.y * y_ratio).translate(pivot)
    }

    /// Component-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: Vector2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(&self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

/// Prints single-precision components, e.g. `(1.5,-2)`
impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x as f32, self.y as f32)
    }
}

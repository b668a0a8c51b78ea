//! Angle helpers

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::vector2::Vector2;

/// Wrap an angle in radians into `(-π, π]`
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

/// Signed angle between two unit vectors by quadrant correction.
///
/// `b` is turned a quarter at a time until it sits within 90° of `a`, so
/// `acos` only ever sees a non-negative dot product. With no correction the
/// sign comes from one more quarter turn. Result lies in `(-π/2, 3π/2]`.
pub(crate) fn quadrant_corrected_angle(a: Vector2, b: Vector2) -> f64 {
    let mut b = b;
    let mut offset = 0.0;

    // At most three quarter turns: one of any four consecutive ones faces `a`
    while a.dot(b) < 0.0 {
        b = b.perpendicular();
        offset += FRAC_PI_2;
    }

    let mut angle = a.dot(b).clamp(-1.0, 1.0).acos() + offset;

    if offset == 0.0 && a.dot(b.perpendicular()) < 0.0 {
        angle = -angle;
    }

    angle
}

//! Closed-form vs iterative signed angle
//!
//! `angle_to` replaced the quadrant-correction loop. These tests pin the two
//! together on representative pairs so any drift shows up here.

use proptest::prelude::*;
use ringkit_geometry::{wrap_angle, GeometryError, Vector2};
use std::f64::consts::PI;

// acos loses precision near a dot product of 1
const EPS: f64 = 1e-6;

fn unit(theta: f64) -> Vector2 {
    Vector2::new(theta.cos(), theta.sin())
}

/// Every 15° step around the circle, skipping the ±π branch cut.
#[test]
fn test_iterative_matches_closed_form_on_compass_steps() {
    for base_deg in (0..360).step_by(30) {
        for delta_deg in (-165..=165).step_by(15) {
            let a = unit((base_deg as f64).to_radians());
            let b = unit(((base_deg + delta_deg) as f64).to_radians());

            let iterative = wrap_angle(a.angle_to_iterative(b).unwrap());
            let closed = a.angle_to(b);
            assert!(
                (iterative - closed).abs() < EPS,
                "base {} delta {}: iterative {} closed {}",
                base_deg,
                delta_deg,
                iterative,
                closed
            );
        }
    }
}

/// Same receiver, same argument: both forms agree on the sign.
#[test]
fn test_quarter_turn_sign_matches() {
    let a = Vector2::new(1.0, 0.0);
    let b = Vector2::new(0.0, 1.0);
    let iterative = wrap_angle(a.angle_to_iterative(b).unwrap());
    assert!((iterative + PI / 2.0).abs() < EPS);
    assert!((a.angle_to(b) - iterative).abs() < EPS);
    assert!((b.angle_to(a) - wrap_angle(b.angle_to_iterative(a).unwrap())).abs() < EPS);
}

/// The iterative form never needs wrapping for small angles.
#[test]
fn test_iterative_small_angles_unwrapped() {
    let a = Vector2::new(2.0, 0.0);
    let b = Vector2::new(5.0, -5.0);
    let angle = a.angle_to_iterative(b).unwrap();
    assert!((angle - PI / 4.0).abs() < EPS);
    assert!((angle - a.angle_to(b)).abs() < EPS);
}

#[test]
fn test_iterative_rejects_zero_vectors() {
    let a = Vector2::new(1.0, 1.0);
    assert_eq!(
        Vector2::ZERO.angle_to_iterative(a),
        Err(GeometryError::ZeroLength)
    );
    assert_eq!(
        a.angle_to_iterative(Vector2::ZERO),
        Err(GeometryError::ZeroLength)
    );
}

proptest! {
    /// Both formulas agree for arbitrary non-degenerate pairs
    #[test]
    fn iterative_matches_closed_form(
        ax in -100.0f64..100.0, ay in -100.0f64..100.0,
        bx in -100.0f64..100.0, by in -100.0f64..100.0,
    ) {
        let a = Vector2::new(ax, ay);
        let b = Vector2::new(bx, by);
        prop_assume!(a.length() > 1e-3 && b.length() > 1e-3);

        let closed = a.angle_to(b);
        // Near ±π the two may land on opposite sides of the cut
        prop_assume!(PI - closed.abs() > 1e-6);

        let iterative = wrap_angle(a.angle_to_iterative(b).unwrap());
        prop_assert!((iterative - closed).abs() < 1e-6, "{} vs {}", iterative, closed);
    }
}

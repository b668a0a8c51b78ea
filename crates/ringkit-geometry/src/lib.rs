//! 2D Geometry for ringkit
//!
//! Small value-type geometry used to lay out round progress counters:
//! - [`Vector2`]: point/vector arithmetic, dot and cross products, signed angles
//! - Pivot-relative transforms: rotation, uniform scale, per-axis shear
//! - [`Interval`]: closed 1D ranges and their overlap
//!
//! ## Example
//!
//! ```rust
//! use ringkit_geometry::Vector2;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let center = Vector2::new(50.0, 50.0);
//! let tip = Vector2::new(50.0, 10.0).rotate(center, FRAC_PI_2);
//! assert!(tip.approx_eq(Vector2::new(90.0, 50.0), 1e-9));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure values**: every type is `Copy`; every operation returns a new value
//! 2. **No silent NaN**: direction-taking operations return [`GeometryResult`]
//!    instead of dividing by zero

pub mod angle;
pub mod error;
pub mod interval;
pub mod vector2;

pub use angle::wrap_angle;
pub use error::{GeometryError, GeometryResult};
pub use interval::Interval;
pub use vector2::Vector2;

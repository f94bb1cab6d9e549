//! Sampling and synthesis of Bézier curves over 2d points.
//!
//! The curve representation is an owned control polygon of arbitrary degree
//! (degree = number of control points - 1). Points on the curve are evaluated
//! with the generalized Bernstein polynomial, blending the control points with
//! binomial coefficients taken from a row of Pascal's triangle, see [`Bezier`]
//! and [`pascal::row`].
//!
//! Control polygons can be supplied directly or synthesized between two anchor
//! points with uniformly random interior offsets, see [`Bezier::scattered`].
//! The randomness source is always passed in by the caller, so synthesis is
//! deterministic under a seeded generator.

#![no_std]

extern crate alloc;

mod bezier;
mod error;
pub mod pascal;
mod point;
mod scatter;

pub use bezier::{Bezier, DEFAULT_RESOLUTION};
pub use error::CurveError;
pub use point::Point2;

/// The native float type of the library used for interpolation parameters.
pub type NativeFloat = f64;

/// Absolute tolerance for floating point comparisons.
pub const EPSILON: NativeFloat = 1e-9;

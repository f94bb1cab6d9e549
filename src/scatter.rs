//! Synthesis of randomized control polygons between two anchor points.
//!
//! The randomness source is passed in by the caller, so synthesis is
//! deterministic under a seeded generator and concurrent callers hold one
//! generator each instead of contending on a hidden global one.

use alloc::vec::Vec;

use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::bezier::Bezier;
use crate::error::CurveError;
use crate::point::Point2;

impl<T> Bezier<T>
where
    T: Float + SampleUniform,
{
    /// Synthesize the four point control polygon `[start, c1, c2, end]` of a
    /// cubic curve, where `c1` and `c2` are the start and end anchors
    /// displaced by an independent uniform offset per coordinate.
    ///
    /// Offsets are drawn from the half open interval `[-span, span)` with
    /// `span = |deviation| * distance(start, end)`; a negative deviation
    /// jitters over the same symmetric interval as its positive counterpart.
    /// A deviation of zero consumes no entropy and yields
    /// `[start, start, end, end]` exactly.
    pub fn scattered<R>(
        rng: &mut R,
        start: Point2<T>,
        end: Point2<T>,
        deviation: T,
    ) -> Result<Self, CurveError>
    where
        R: Rng + ?Sized,
    {
        Self::scattered_with(rng, start, end, deviation, 2)
    }

    /// Synthesize a control polygon with `interior` shaping points between
    /// the `start` and `end` anchors (`interior + 2` points overall).
    ///
    /// Interior point bases are spread evenly along the chord from `start` to
    /// `end` (for two interior points the bases are the anchors themselves,
    /// for a single one it is the chord midpoint) and then displaced like in
    /// [`Bezier::scattered`]. The anchors themselves are never displaced.
    pub fn scattered_with<R>(
        rng: &mut R,
        start: Point2<T>,
        end: Point2<T>,
        deviation: T,
        interior: usize,
    ) -> Result<Self, CurveError>
    where
        R: Rng + ?Sized,
    {
        if !start.is_finite() || !end.is_finite() || !deviation.is_finite() {
            return Err(CurveError::NonFinitePoint);
        }

        let span = (deviation * start.distance(end)).abs();

        let mut control_points = Vec::with_capacity(interior + 2);
        control_points.push(start);
        for i in 1..=interior {
            let u = if interior == 1 {
                T::from(0.5).unwrap()
            } else {
                T::from(i - 1).unwrap() / T::from(interior - 1).unwrap()
            };
            // anchor-exact chord interpolation: u = 0 is start, u = 1 is end
            let base = start * (T::one() - u) + end * u;
            let offset = Point2::new(uniform_offset(rng, span), uniform_offset(rng, span));
            control_points.push(base + offset);
        }
        control_points.push(end);

        Bezier::new(control_points)
    }
}

/// One uniform draw from the half open interval `[-span, span)`, or exactly
/// zero without touching the generator when the interval is empty.
fn uniform_offset<T, R>(rng: &mut R, span: T) -> T
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    if span > T::zero() {
        Uniform::new(-span, span).sample(rng)
    } else {
        T::zero()
    }
}

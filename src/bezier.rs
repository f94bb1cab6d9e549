use alloc::vec::Vec;

use num_traits::Float;

use crate::error::CurveError;
use crate::pascal;
use crate::point::Point2;

/// Number of samples produced by [`Bezier::sample`]: parameter steps of 0.01
/// from t = 0 to t = 1 inclusive.
pub const DEFAULT_RESOLUTION: usize = 101;

/// General implementation of a Bezier curve of arbitrary degree (= number of control points - 1).
/// The curve is solely defined by its `control_points`; the first and last are
/// the start and end anchors that lie on the curve, interior points shape it.
/// Points on the curve are evaluated for an interpolation parameter 't' in
/// interval [0,1] by blending the control points with the Bernstein basis
/// polynomials, whose binomial coefficients come from [`pascal::row`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier<T> {
    /// Control points which define the curve and hence its degree
    pub(crate) control_points: Vec<Point2<T>>,
}

impl<T> Bezier<T>
where
    T: Float,
{
    /// Create a new Bezier curve over the given control polygon.
    ///
    /// At least two control points (a start and an end anchor) are required
    /// and every coordinate must be finite; the polygon is validated here so
    /// evaluation itself cannot encounter a malformed curve.
    pub fn new(control_points: Vec<Point2<T>>) -> Result<Self, CurveError> {
        if control_points.len() < 2 {
            return Err(CurveError::TooFewControlPoints);
        }
        if control_points.iter().any(|p| !p.is_finite()) {
            return Err(CurveError::NonFinitePoint);
        }
        Ok(Bezier { control_points })
    }

    pub fn control_points(&self) -> &[Point2<T>] {
        &self.control_points
    }

    /// The polynomial degree of the curve, `control_points().len() - 1`.
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Evaluate a point on the curve at 't' which should be in the interval [0,1].
    pub fn eval(&self, t: T) -> Result<Point2<T>, CurveError> {
        let coefficients = pascal::row(self.degree())?;
        Ok(self.blend(&coefficients, t))
    }

    /// Sample the curve at [`DEFAULT_RESOLUTION`] uniformly spaced parameter values.
    ///
    /// # Example
    /// ```
    /// use meander::{Bezier, Point2};
    ///
    /// let line = Bezier::new(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]).unwrap();
    /// let samples = line.sample().unwrap();
    /// assert_eq!(samples.len(), meander::DEFAULT_RESOLUTION);
    /// assert_eq!(samples[50], Point2::new(5.0, 0.0));
    /// ```
    pub fn sample(&self) -> Result<Vec<Point2<T>>, CurveError> {
        self.sample_with(DEFAULT_RESOLUTION)
    }

    /// Sample the curve at `resolution` uniformly spaced parameter values
    /// t = j / (resolution - 1) for j in 0..resolution.
    ///
    /// The binomial coefficient row is computed once per call and reused for
    /// every sample. The first sample equals the start anchor and the last
    /// sample the end anchor. Returns a freshly allocated buffer of exactly
    /// `resolution` points; the control polygon is left untouched.
    pub fn sample_with(&self, resolution: usize) -> Result<Vec<Point2<T>>, CurveError> {
        if resolution < 2 {
            return Err(CurveError::InvalidResolution);
        }
        let coefficients = pascal::row(self.degree())?;
        let last = T::from(resolution - 1).unwrap();
        let mut samples = Vec::with_capacity(resolution);
        for j in 0..resolution {
            let t = T::from(j).unwrap() / last;
            samples.push(self.blend(&coefficients, t));
        }
        Ok(samples)
    }

    /// Blend the control points with the Bernstein basis at 't':
    /// the sum over i of C(n,i) * t^i * (1-t)^(n-i) * control_points[i].
    /// `powi` maps an exponent of zero to exactly one, which covers the 0^0
    /// cases at t = 0 and t = 1 and keeps the anchors interpolated exactly.
    fn blend(&self, coefficients: &[u64], t: T) -> Point2<T> {
        let n = self.degree();
        let one_t = T::one() - t;
        let mut x = T::zero();
        let mut y = T::zero();
        for (i, point) in self.control_points.iter().enumerate() {
            let basis = T::from(coefficients[i]).unwrap()
                * t.powi(i as i32)
                * one_t.powi((n - i) as i32);
            x = x + basis * point.x;
            y = y + basis * point.y;
        }
        Point2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;
    use alloc::vec;

    #[test]
    fn eval_endpoints() {
        let points = vec![
            Point2::new(0f64, 1.77f64),
            Point2::new(1.1f64, -1f64),
            Point2::new(4.3f64, 3f64),
            Point2::new(3.2f64, -4f64),
            Point2::new(7.3f64, 2.7f64),
            Point2::new(8.9f64, 1.7f64),
        ];
        let curve = Bezier::new(points.clone()).unwrap();

        // check if start/end points match
        let start = curve.eval(0.0).unwrap();
        assert!((start - points[0]).squared_length() < EPSILON);

        let end = curve.eval(1.0).unwrap();
        assert!((end - points[points.len() - 1]).squared_length() < EPSILON);
    }

    #[test]
    fn sample_shape_and_anchors() {
        let curve = Bezier::new(vec![
            Point2::new(0f64, 1.77f64),
            Point2::new(2.9f64, 0f64),
            Point2::new(4.3f64, 3f64),
            Point2::new(3.2f64, -4f64),
        ])
        .unwrap();

        let samples = curve.sample().unwrap();
        assert_eq!(samples.len(), DEFAULT_RESOLUTION);
        assert_eq!(samples[0], curve.control_points()[0]);
        assert_eq!(samples[DEFAULT_RESOLUTION - 1], curve.control_points()[3]);

        let coarse = curve.sample_with(11).unwrap();
        assert_eq!(coarse.len(), 11);
        assert_eq!(coarse[0], samples[0]);
        assert_eq!(coarse[10], samples[100]);
    }

    #[test]
    fn linear_interpolation() {
        let curve = Bezier::new(vec![Point2::new(0f64, 0f64), Point2::new(10f64, 0f64)]).unwrap();
        let samples = curve.sample().unwrap();

        // t = 0.5 lands on sample index 50
        assert!((samples[50].x() - 5.0).abs() < EPSILON);
        assert!(samples[50].y().abs() < EPSILON);

        // every sample of a degree 1 curve is start * (1-t) + end * t
        for (j, sample) in samples.iter().enumerate() {
            let t = j as f64 / 100.0;
            assert!((sample.x() - 10.0 * t).abs() < EPSILON);
            assert!(sample.y().abs() < EPSILON);
        }
    }

    #[test]
    fn cubic_midpoint() {
        let curve = Bezier::new(vec![
            Point2::new(0f64, 0f64),
            Point2::new(0f64, 10f64),
            Point2::new(10f64, 10f64),
            Point2::new(10f64, 0f64),
        ])
        .unwrap();
        let samples = curve.sample().unwrap();

        // 0.125 * 0 + 0.375 * 0 + 0.375 * 10 + 0.125 * 10 = 7.5 in x,
        // 0.125 * 0 + 0.375 * 10 + 0.375 * 10 + 0.125 * 0 = 7.5 in y
        assert!((samples[50].x() - 7.5).abs() < EPSILON);
        assert!((samples[50].y() - 7.5).abs() < EPSILON);
    }

    /// Check whether the Bernstein evaluation is equivalent to the unrolled
    /// De Casteljau evaluation of a cubic curve
    #[test]
    fn equivalence_cubic_casteljau() {
        let start = Point2::new(0f64, 1.77f64);
        let ctrl1 = Point2::new(1.1f64, -1f64);
        let ctrl2 = Point2::new(4.3f64, 3f64);
        let end = Point2::new(3.2f64, -4f64);
        let curve = Bezier::new(vec![start, ctrl1, ctrl2, end]).unwrap();

        let casteljau = |t: f64| {
            let ctrl_1ab = start + (ctrl1 - start) * t;
            let ctrl_1bc = ctrl1 + (ctrl2 - ctrl1) * t;
            let ctrl_1cd = ctrl2 + (end - ctrl2) * t;
            let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
            let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
            ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
        };

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let err = curve.eval(t).unwrap() - casteljau(t);
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn repeat_sampling_is_bit_identical() {
        let curve = Bezier::new(vec![
            Point2::new(0f64, 1.77f64),
            Point2::new(1.1f64, -1f64),
            Point2::new(3.2f64, -4f64),
        ])
        .unwrap();
        assert_eq!(curve.sample().unwrap(), curve.sample().unwrap());
        assert_eq!(curve.sample_with(33).unwrap(), curve.sample_with(33).unwrap());
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(
            Bezier::new(vec![Point2::new(0f64, 0f64)]),
            Err(CurveError::TooFewControlPoints)
        );
        assert_eq!(
            Bezier::new(vec![Point2::new(0f64, f64::NAN), Point2::new(1f64, 0f64)]),
            Err(CurveError::NonFinitePoint)
        );

        let line = Bezier::new(vec![Point2::new(0f64, 0f64), Point2::new(1f64, 0f64)]).unwrap();
        assert_eq!(line.sample_with(1), Err(CurveError::InvalidResolution));
        assert_eq!(line.sample_with(0), Err(CurveError::InvalidResolution));
    }
}

use core::fmt;

/// Errors raised by curve construction, coefficient computation and sampling.
///
/// Every operation in this crate is a pure, terminating computation; these
/// failures signal bad call-site arguments and are never worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// A curve needs at least a start and an end control point.
    TooFewControlPoints,
    /// Sampling needs at least the two endpoint samples.
    InvalidResolution,
    /// An input coordinate or factor was NaN or infinite.
    NonFinitePoint,
    /// The binomial coefficients of the requested degree exceed u64 range.
    CoefficientOverflow,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CurveError::TooFewControlPoints => "a curve needs at least two control points",
            CurveError::InvalidResolution => "sampling resolution must be at least two",
            CurveError::NonFinitePoint => "input coordinates must be finite",
            CurveError::CoefficientOverflow => "binomial coefficients exceed u64 for this degree",
        };
        f.write_str(msg)
    }
}

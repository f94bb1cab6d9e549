//! Rows of Pascal's triangle in exact integer arithmetic.

use alloc::vec::Vec;

use crate::error::CurveError;

/// Compute row `n` of Pascal's triangle, i.e. the binomial coefficients
/// C(n, k) for k in 0..=n.
///
/// Uses the multiplicative recurrence `C(n, k) = C(n, k-1) * (n - k + 1) / k`,
/// which divides evenly at every step, so the row stays exact as long as it
/// fits into u64. The first row that does not fit is n = 68; it yields
/// [`CurveError::CoefficientOverflow`] instead of wrapping.
pub fn row(n: usize) -> Result<Vec<u64>, CurveError> {
    let mut row = Vec::with_capacity(n + 1);
    row.push(1u64);
    for k in 1..=n {
        // the division is exact, widen so the product cannot wrap before it
        let wide = row[k - 1] as u128 * (n - k + 1) as u128 / k as u128;
        let coefficient = u64::try_from(wide).map_err(|_| CurveError::CoefficientOverflow)?;
        row.push(coefficient);
    }
    Ok(row)
}

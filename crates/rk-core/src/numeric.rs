//! Float guards for property results and balance arithmetic.

use crate::RkError;

/// Closeness band: absolute half-width plus a share of the larger magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    pub const fn absolute(abs: f64) -> Self {
        Self { abs, rel: 0.0 }
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `value` through unless it is NaN or infinite.
pub fn ensure_finite(value: f64, what: &'static str) -> Result<f64, RkError> {
    if !value.is_finite() {
        return Err(RkError::NonFinite { what, value });
    }
    Ok(value)
}

/// `num / den` for balance ratios (mass fraction, quality, efficiency).
///
/// A zero or non-finite denominator is reported with the denominator as the
/// offending value, so a vanishing enthalpy difference never turns into an
/// infinite ratio.
pub fn checked_ratio(num: f64, den: f64, what: &'static str) -> Result<f64, RkError> {
    if den == 0.0 || !den.is_finite() {
        return Err(RkError::NonFinite { what, value: den });
    }
    ensure_finite(num / den, what)
}

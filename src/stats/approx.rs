//! Approximate equality with a relative tolerance

use crate::error::{Error, Result};
use tracing::debug;

/// Absolute tolerance floor so that an expected value of zero is usable
pub const DEFAULT_ABS_TOL: f64 = 1e-12;

/// `|actual - expected| <= max(rel * |expected|, DEFAULT_ABS_TOL)`
///
/// NaN never compares equal.
#[inline]
pub fn approx_eq(actual: f64, expected: f64, rel: f64) -> bool {
    (actual - expected).abs() <= (rel * expected.abs()).max(DEFAULT_ABS_TOL)
}

/// Check one statistic, returning `ToleranceExceeded` on failure
pub fn check_approx(statistic: &str, actual: f64, expected: f64, rel: f64) -> Result<()> {
    debug!(statistic, actual, expected, rel, "checking statistic");
    if approx_eq(actual, expected, rel) {
        Ok(())
    } else {
        Err(Error::tolerance(statistic, expected, actual, rel))
    }
}

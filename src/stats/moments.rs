//! Raw moments and the uniform moment law

use super::{check_approx, non_empty, sum_map};
use crate::dtype::Element;
use crate::error::{Error, Result};

/// Arithmetic mean
pub fn mean<T: Element>(xs: &[T]) -> Result<f64> {
    raw_moment(xs, 1)
}

/// `k`-th raw moment: `mean(x^k)`
pub fn raw_moment<T: Element>(xs: &[T], k: i32) -> Result<f64> {
    non_empty(xs, "xs")?;
    Ok(sum_map(xs, |x| x.powi(k)) / xs.len() as f64)
}

fn check_interval(min: f64, max: f64) -> Result<()> {
    if !(min.is_finite() && max.is_finite() && min < max) {
        return Err(Error::invalid_argument(
            "max",
            format!("expected finite min < max, got min={}, max={}", min, max),
        ));
    }
    Ok(())
}

/// Map samples from `[min, max)` onto `[0, 1)`
pub fn normalize<T: Element>(xs: &[T], min: f64, max: f64) -> Result<Vec<f64>> {
    check_interval(min, max)?;
    let span = max - min;
    Ok(xs.iter().map(|x| (x.to_f64() - min) / span).collect())
}

/// Check `mean(xs) ≈ expected` within relative tolerance `rel`
pub fn check_mean<T: Element>(xs: &[T], expected: f64, rel: f64) -> Result<()> {
    check_approx("mean", mean(xs)?, expected, rel)
}

/// Check that samples look uniform over `[min, max)`
///
/// After normalizing to `u = (x - min) / (max - min)`, the raw moments of
/// a uniform `[0, 1)` variable are `E[u^k] = 1 / (k + 1)`. Checks `k` in
/// 1, 2 and 3 against relative tolerance `rel`.
pub fn check_uniform_moments<T: Element>(xs: &[T], min: f64, max: f64, rel: f64) -> Result<()> {
    check_interval(min, max)?;
    non_empty(xs, "xs")?;

    let span = max - min;
    let n = xs.len() as f64;
    for k in 1..=3 {
        let moment = sum_map(xs, |x| ((x - min) / span).powi(k)) / n;
        check_approx(
            &format!("normalized raw moment {}", k),
            moment,
            1.0 / (k + 1) as f64,
            rel,
        )?;
    }
    Ok(())
}

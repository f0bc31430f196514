//! Norms and angles of vector samples

use super::{check_approx, non_empty};
use crate::dtype::Element;
use crate::error::Result;

/// Squared Euclidean norm of every point
pub fn squared_norms<T: Element, const N: usize>(points: &[[T; N]]) -> Vec<f64> {
    points
        .iter()
        .map(|p| p.iter().map(|c| c.to_f64().powi(2)).sum::<f64>())
        .collect()
}

/// Polar angle `atan2(y, x)` of every 2-D point, in `[-π, π]`
pub fn angles<T: Element>(points: &[[T; 2]]) -> Vec<f64> {
    points
        .iter()
        .map(|[x, y]| y.to_f64().atan2(x.to_f64()))
        .collect()
}

/// Check every point has squared norm `≈ 1` within relative `rel`
///
/// Reports the point furthest from the unit sphere on failure.
pub fn check_unit_norms<T: Element, const N: usize>(points: &[[T; N]], rel: f64) -> Result<()> {
    non_empty(points, "points")?;
    let worst = squared_norms(points)
        .into_iter()
        .max_by(|a, b| (a - 1.0).abs().total_cmp(&(b - 1.0).abs()))
        .unwrap_or(1.0);
    check_approx("squared norm", worst, 1.0, rel)
}

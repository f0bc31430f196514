//! Quadrant occupancy of 2-D samples

use super::{check_approx, non_empty};
use crate::dtype::Element;
use crate::error::Result;

/// Count points per quadrant split at `threshold` on both axes
///
/// Quadrant index is `2 * (x < t) + (y < t)`.
pub fn quadrant_counts<T: Element>(points: &[[T; 2]], threshold: f64) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for [x, y] in points {
        let c = usize::from(x.to_f64() < threshold) * 2 + usize::from(y.to_f64() < threshold);
        counts[c] += 1;
    }
    counts
}

/// Check each quadrant holds `≈ 1/4` of the points within relative `rel`
pub fn check_balanced_quadrants<T: Element>(
    points: &[[T; 2]],
    threshold: f64,
    rel: f64,
) -> Result<()> {
    non_empty(points, "points")?;
    let n = points.len() as f64;
    for (c, &count) in quadrant_counts(points, threshold).iter().enumerate() {
        check_approx(&format!("quadrant {} fraction", c), count as f64 / n, 0.25, rel)?;
    }
    Ok(())
}

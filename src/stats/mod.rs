//! Host-side sample statistics and tolerance checks
//!
//! These compare empirical statistics of kernel output against closed-form
//! expectations. Every `check_*` function returns
//! [`Error::ToleranceExceeded`](crate::error::Error::ToleranceExceeded) naming
//! the statistic when it falls outside its band.
//!
//! ```ignore
//! let x: Vec<f32> = samples.to_vec();
//! stats::check_uniform_moments(&x, 0.0, 1.0, 1e-2)?;
//! ```

mod approx;
mod circle;
mod moments;
mod quadrant;

pub use approx::{DEFAULT_ABS_TOL, approx_eq, check_approx};
pub use circle::{angles, check_unit_norms, squared_norms};
pub use moments::{check_mean, check_uniform_moments, mean, normalize, raw_moment};
pub use quadrant::{check_balanced_quadrants, quadrant_counts};

use crate::dtype::Element;
use crate::error::{Error, Result};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Sum of `f(x)` over `xs`, in parallel when rayon is enabled
pub(crate) fn sum_map<T, F>(xs: &[T], f: F) -> f64
where
    T: Element,
    F: Fn(f64) -> f64 + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        xs.par_iter().map(|x| f(x.to_f64())).sum()
    }

    #[cfg(not(feature = "rayon"))]
    {
        xs.iter().map(|x| f(x.to_f64())).sum()
    }
}

pub(crate) fn non_empty<T>(xs: &[T], arg: &'static str) -> Result<()> {
    if xs.is_empty() {
        return Err(Error::invalid_argument(arg, "no samples"));
    }
    Ok(())
}

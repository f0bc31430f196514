//! Kernel launch interface.

use crate::array::Array;
use crate::dtype::Element;
use crate::error::Result;
use crate::rng::Sampler;
use crate::runtime::Runtime;

/// Per-element kernel launches over arrays
///
/// A kernel body is a closure called once for every element index `i` of
/// the output array, together with a [`Sampler`] private to that element.
/// Its return value is stored at `out[i]`. Launches are data-parallel and
/// block until every element has been written.
///
/// The output is borrowed mutably and its storage must not be shared with
/// any clone, so nothing can observe the array while the launch writes it.
///
/// # Example
///
/// ```ignore
/// // x[i] = rand() * rand()
/// client.launch(&mut x, |_, s| s.rand() * s.rand())?;
///
/// // x[i] = randUnit2D()
/// client.launch_vec(&mut dirs, |_, s| s.rand_unit_2d())?;
/// ```
pub trait KernelOps<R: Runtime> {
    /// Fill a scalar array
    ///
    /// # Errors
    ///
    /// - `DTypeMismatch` if `T` is not the array element type
    /// - `ShapeMismatch` if `out` is a vector array
    /// - `InvalidArgument` if the storage of `out` is shared with a clone
    fn launch<T, F>(&self, out: &mut Array<R>, body: F) -> Result<()>
    where
        T: Element,
        F: Fn(usize, &mut Sampler) -> T + Send + Sync;

    /// Fill an array of `N`-wide vectors (shape `[n, N]`)
    ///
    /// # Errors
    ///
    /// - `DTypeMismatch` if `T` is not the array element type
    /// - `ShapeMismatch` if `out` is not shaped `[n, N]`
    /// - `InvalidArgument` if the storage of `out` is shared with a clone
    fn launch_vec<T, const N: usize, F>(&self, out: &mut Array<R>, body: F) -> Result<()>
    where
        T: Element,
        F: Fn(usize, &mut Sampler) -> [T; N] + Send + Sync;
}

//! Per-element launch loops for the CPU runtime
//!
//! Each element `i` builds its own [`Sampler`] from `(seed, launch, i)` and
//! writes exactly one slot of the output, so elements can run in any order
//! on any thread.

use super::client::CpuClient;
use crate::dtype::Element;
use crate::rng::Sampler;
use tracing::trace;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Run `body` for every element and store its result at `out[i]`
///
/// # Safety
/// - `out` must be a valid, writable pointer to `len` elements of `V`
/// - nothing else may access `out` for the duration of the call
pub(crate) unsafe fn launch_kernel<V, F>(
    client: &CpuClient,
    out: *mut V,
    len: usize,
    seed: u64,
    launch: u64,
    body: F,
) where
    V: Copy + Send + Sync,
    F: Fn(usize, &mut Sampler) -> V + Send + Sync,
{
    if len == 0 {
        return;
    }

    trace!(seed, launch, len, "deriving element streams");
    let out_addr = out as usize;
    let run = |i: usize| {
        let mut sampler = Sampler::new(seed, launch, i as u64);
        let value = body(i, &mut sampler);
        // SAFETY: i < len and each index is visited exactly once
        unsafe { (out_addr as *mut V).add(i).write(value) };
    };

    #[cfg(feature = "rayon")]
    {
        let min_len = client.rayon_min_len();
        client.install_parallelism(|| {
            (0..len).into_par_iter().with_min_len(min_len).for_each(run);
        });
    }

    #[cfg(not(feature = "rayon"))]
    {
        let _ = client;
        (0..len).for_each(run);
    }
}

/// Scalar launch over `len` elements of `T`
///
/// # Safety
/// Same contract as [`launch_kernel`].
pub(crate) unsafe fn launch_scalar_kernel<T, F>(
    client: &CpuClient,
    out: *mut T,
    len: usize,
    seed: u64,
    launch: u64,
    body: F,
) where
    T: Element,
    F: Fn(usize, &mut Sampler) -> T + Send + Sync,
{
    unsafe { launch_kernel(client, out, len, seed, launch, body) }
}

/// Vector launch over `len` rows of `N` contiguous `T` components
///
/// # Safety
/// - `out` must be a valid, writable pointer to `len * N` elements of `T`
/// - nothing else may access `out` for the duration of the call
pub(crate) unsafe fn launch_vec_kernel<T, const N: usize, F>(
    client: &CpuClient,
    out: *mut T,
    len: usize,
    seed: u64,
    launch: u64,
    body: F,
) where
    T: Element,
    F: Fn(usize, &mut Sampler) -> [T; N] + Send + Sync,
{
    // [T; N] has the alignment of T and no padding, so rows tile the buffer.
    unsafe { launch_kernel(client, out as *mut [T; N], len, seed, launch, body) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::{CpuDevice, LaunchConfig};

    fn client() -> CpuClient {
        CpuClient::with_config(CpuDevice::new(), LaunchConfig::default().with_seed(3)).unwrap()
    }

    #[test]
    fn test_every_index_written_once() {
        let client = client();
        let mut out = vec![0u32; 5000];
        unsafe {
            launch_scalar_kernel(&client, out.as_mut_ptr(), out.len(), 3, 0, |i, _| {
                i as u32
            })
        };
        assert!(out.iter().enumerate().all(|(i, &v)| v == i as u32));
    }

    #[test]
    fn test_vec_rows_tile_buffer() {
        let client = client();
        let mut out = vec![0.0f64; 3 * 100];
        unsafe {
            launch_vec_kernel(&client, out.as_mut_ptr(), 100, 3, 0, |i, _| {
                [i as f64, i as f64 + 0.5, -(i as f64)]
            })
        };
        for (i, row) in out.chunks_exact(3).enumerate() {
            assert_eq!(row, &[i as f64, i as f64 + 0.5, -(i as f64)]);
        }
    }

    #[test]
    fn test_zero_length_is_noop() {
        let client = client();
        unsafe {
            launch_scalar_kernel(&client, std::ptr::null_mut::<f32>(), 0, 3, 0, |_, s| {
                s.rand()
            })
        };
    }
}

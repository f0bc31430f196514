//! KernelOps implementation for the CPU runtime.

use crate::array::Array;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::KernelOps;
use crate::rng::Sampler;
use crate::runtime::cpu::{CpuClient, CpuRuntime, kernels};
use tracing::debug;

fn check_dtype<T: Element>(out: &Array<CpuRuntime>) -> Result<()> {
    if out.dtype() != T::DTYPE {
        return Err(Error::DTypeMismatch {
            lhs: out.dtype(),
            rhs: T::DTYPE,
        });
    }
    Ok(())
}

fn check_exclusive(out: &Array<CpuRuntime>) -> Result<()> {
    let refs = out.storage().ref_count();
    if refs > 1 {
        return Err(Error::invalid_argument(
            "out",
            format!("launch output storage is shared by {} handles", refs),
        ));
    }
    Ok(())
}

impl KernelOps<CpuRuntime> for CpuClient {
    fn launch<T, F>(&self, out: &mut Array<CpuRuntime>, body: F) -> Result<()>
    where
        T: Element,
        F: Fn(usize, &mut Sampler) -> T + Send + Sync,
    {
        check_dtype::<T>(out)?;
        check_exclusive(out)?;
        if out.is_vector() {
            return Err(Error::shape_mismatch(&[out.len()], out.shape()));
        }

        let len = out.len();
        let seed = self.config().seed;
        let launch = self.next_launch();
        debug!(launch, len, dtype = %out.dtype(), "cpu scalar launch");

        // SAFETY: storage holds `len` elements of T (dtype checked above)
        unsafe {
            kernels::launch_scalar_kernel(
                self,
                out.storage().ptr() as *mut T,
                len,
                seed,
                launch,
                body,
            );
        }
        Ok(())
    }

    fn launch_vec<T, const N: usize, F>(
        &self,
        out: &mut Array<CpuRuntime>,
        body: F,
    ) -> Result<()>
    where
        T: Element,
        F: Fn(usize, &mut Sampler) -> [T; N] + Send + Sync,
    {
        check_dtype::<T>(out)?;
        check_exclusive(out)?;
        if !out.is_vector() || out.width() != N {
            return Err(Error::shape_mismatch(&[out.len(), N], out.shape()));
        }

        let len = out.len();
        let seed = self.config().seed;
        let launch = self.next_launch();
        debug!(launch, len, width = N, dtype = %out.dtype(), "cpu vector launch");

        // SAFETY: storage holds `len * N` elements of T (shape checked above)
        unsafe {
            kernels::launch_vec_kernel(
                self,
                out.storage().ptr() as *mut T,
                len,
                seed,
                launch,
                body,
            );
        }
        Ok(())
    }
}

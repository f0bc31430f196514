//! Array-returning random sampling operations.

use super::KernelOps;
use crate::array::Array;
use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::{Runtime, RuntimeClient};

/// Largest magnitude up to which every integer is exact in `f32`
const F32_EXACT_INT: u32 = 1 << 24;

fn float_only(dtype: DType, op: &'static str) -> Result<()> {
    if dtype.is_float() {
        Ok(())
    } else {
        Err(Error::unsupported_dtype(dtype, op))
    }
}

/// Random sampling operations
///
/// Each method allocates a fresh array and fills it with one kernel launch
/// whose body calls the matching [`Sampler`](crate::rng::Sampler) primitive.
/// Vector-valued samplers produce `F32` arrays of shape `[n, width]`.
pub trait RandomOps<R: Runtime>: KernelOps<R> + RuntimeClient<R> {
    /// Uniform values in `[0, 1)`
    ///
    /// `dtype` must be floating point.
    fn rand(&self, n: usize, dtype: DType) -> Result<Array<R>> {
        float_only(dtype, "rand")?;
        let mut out = Array::try_empty(&[n], dtype, self.device())?;
        match dtype {
            DType::F64 => self.launch(&mut out, |_, s| s.rand_f64())?,
            _ => self.launch(&mut out, |_, s| s.rand())?,
        }
        Ok(out)
    }

    /// Uniform values in `[a, b)`
    ///
    /// Requires finite bounds with `a < b` in the output precision; `dtype`
    /// must be floating point.
    fn rand_range(&self, n: usize, a: f64, b: f64, dtype: DType) -> Result<Array<R>> {
        float_only(dtype, "rand_range")?;
        let valid = match dtype {
            DType::F64 => a.is_finite() && b.is_finite() && a < b,
            _ => {
                let (a, b) = (a as f32, b as f32);
                a.is_finite() && b.is_finite() && a < b
            }
        };
        if !valid {
            return Err(Error::invalid_argument(
                "b",
                format!(
                    "rand_range requires finite a < b as {}, got a={}, b={}",
                    dtype, a, b
                ),
            ));
        }

        let mut out = Array::try_empty(&[n], dtype, self.device())?;
        match dtype {
            DType::F64 => self.launch(&mut out, |_, s| s.rand_range_f64(a, b))?,
            _ => {
                let (a, b) = (a as f32, b as f32);
                self.launch(&mut out, |_, s| s.rand_range(a, b))?
            }
        }
        Ok(out)
    }

    /// Uniform integers in `[a, b)`, stored as `dtype`
    ///
    /// `F32` output requires both bounds within `±2^24` so every value is
    /// stored exactly. Unsigned dtypes require `a >= 0`.
    fn rand_int(&self, n: usize, a: i32, b: i32, dtype: DType) -> Result<Array<R>> {
        if b <= a {
            return Err(Error::invalid_argument(
                "b",
                format!("rand_int requires a < b, got a={}, b={}", a, b),
            ));
        }
        if dtype == DType::U32 && a < 0 {
            return Err(Error::invalid_argument(
                "a",
                format!("rand_int with dtype {} requires a >= 0, got a={}", dtype, a),
            ));
        }
        let exact_f32 = a.unsigned_abs() <= F32_EXACT_INT && b.unsigned_abs() <= F32_EXACT_INT;
        if dtype == DType::F32 && !exact_f32 {
            return Err(Error::invalid_argument(
                "b",
                format!(
                    "rand_int with dtype {} requires bounds within 2^24, got a={}, b={}",
                    dtype, a, b
                ),
            ));
        }

        let mut out = Array::try_empty(&[n], dtype, self.device())?;
        dispatch_dtype!(dtype, T => {
            self.launch(&mut out, |_, s| T::from_f64(s.rand_int(a, b) as f64))?;
        });
        Ok(out)
    }

    /// `n` vectors of `N` independent uniforms in `[0, 1)`
    fn rand_nd<const N: usize>(&self, n: usize) -> Result<Array<R>> {
        let mut out = Array::try_empty(&[n, N], DType::F32, self.device())?;
        self.launch_vec(&mut out, |_, s| s.rand_nd::<N>())?;
        Ok(out)
    }

    /// `n` uniform directions on the unit circle
    fn rand_unit_2d(&self, n: usize) -> Result<Array<R>> {
        let mut out = Array::try_empty(&[n, 2], DType::F32, self.device())?;
        self.launch_vec(&mut out, |_, s| s.rand_unit_2d())?;
        Ok(out)
    }

    /// `n` uniform points inside the unit disk
    fn rand_solid_2d(&self, n: usize) -> Result<Array<R>> {
        let mut out = Array::try_empty(&[n, 2], DType::F32, self.device())?;
        self.launch_vec(&mut out, |_, s| s.rand_solid_2d())?;
        Ok(out)
    }

    /// `n` uniform directions on the unit sphere
    fn rand_unit_3d(&self, n: usize) -> Result<Array<R>> {
        let mut out = Array::try_empty(&[n, 3], DType::F32, self.device())?;
        self.launch_vec(&mut out, |_, s| s.rand_unit_3d())?;
        Ok(out)
    }

    /// `n` standard normal variates
    fn randn(&self, n: usize) -> Result<Array<R>> {
        let mut out = Array::try_empty(&[n], DType::F32, self.device())?;
        self.launch(&mut out, |_, s| s.rand_normal())?;
        Ok(out)
    }
}

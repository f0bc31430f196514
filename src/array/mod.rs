//! Arrays of scalar or fixed-width vector elements
//!
//! An [`Array`] is a contiguous block of device memory plus a shape: `[n]`
//! for scalar arrays and `[n, w]` for arrays of `w`-wide vectors. Kernels
//! write into arrays through [`KernelOps`](crate::ops::KernelOps) and results
//! come back to the host with [`Array::to_vec`] or [`Array::to_vec_n`].

mod core;
mod storage;

pub use self::core::{Array, array, vec_array};
pub use storage::Storage;

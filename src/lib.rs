//! # shadekit
//!
//! **Shading-style random sampling primitives, launched as per-element kernels
//! over device arrays, with statistical validation.**
//!
//! shadekit gives kernel bodies the familiar shader RNG vocabulary
//! (`rand`, `rand_range`, `rand_int`, `rand_nd`, `rand_unit_2d`, ...) and
//! checks their output distributions against closed-form expectations.
//!
//! ## Pieces
//!
//! - **Runtime**: `Runtime`/`Device`/`RuntimeClient` traits and a CPU backend
//!   that runs launches across a rayon pool and blocks until complete
//! - **Arrays**: scalar (`[n]`) and fixed-width vector (`[n, w]`) arrays in
//!   host/device shared memory, copied back with `to_vec`
//! - **Sampling**: counter-based Philox streams, one per element per launch
//! - **Statistics**: raw moments, quadrant balance and unit-norm checks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shadekit::prelude::*;
//!
//! let device = CpuRuntime::default_device();
//! let client = CpuRuntime::default_client(&device);
//!
//! let mut x = array::<CpuRuntime>(DType::F32, 1 << 20, &device)?;
//! client.launch(&mut x, |_, s| s.rand())?;
//!
//! let samples: Vec<f32> = x.to_vec();
//! shadekit::stats::check_uniform_moments(&samples, 0.0, 1.0, 1e-2)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): CPU backend
//! - `rayon` (default): Multi-threaded kernel launches and reductions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod array;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod rng;
pub mod runtime;
pub mod stats;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::array::{Array, array, vec_array};
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{KernelOps, RandomOps};
    pub use crate::rng::Sampler;
    pub use crate::runtime::{Device, Runtime, RuntimeClient};

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, LaunchConfig};
}

/// Default runtime based on enabled features
#[cfg(feature = "cpu")]
pub type DefaultRuntime = runtime::cpu::CpuRuntime;

//! CPU runtime implementation
//!
//! The CPU runtime allocates arrays on the heap and runs kernel launches
//! across a rayon pool (or sequentially without the `rayon` feature). Host
//! memory is the device memory, so transfers are plain copies.

mod client;
mod config;
mod device;
pub(crate) mod kernels;
mod runtime;

pub use client::CpuClient;
pub use config::{DEFAULT_MIN_LEN, LaunchConfig};
pub use device::CpuDevice;
pub use runtime::CpuRuntime;

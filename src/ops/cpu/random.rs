//! CPU implementation of random operations.

use crate::ops::RandomOps;
use crate::runtime::cpu::{CpuClient, CpuRuntime};

/// RandomOps implementation for CPU runtime.
///
/// Every method uses the launch-based defaults; the CPU backend has no
/// specialized fill kernels.
impl RandomOps<CpuRuntime> for CpuClient {}

//! Common test utilities
#![allow(dead_code)]

use shadekit::runtime::Runtime;
use shadekit::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, LaunchConfig};

/// Sample count used by the moment tests
pub const N_LARGE: usize = 1024 * 1024;

/// Create a CPU client and device with an entropy seed
pub fn create_cpu_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    (client, device)
}

/// Create a CPU client and device with a fixed seed
pub fn create_seeded_client(seed: u64) -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuClient::with_config(device.clone(), LaunchConfig::default().with_seed(seed))
        .expect("failed to build seeded client");
    (client, device)
}

/// Install a fmt subscriber honoring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Widen rows of f32 components to f64 for statistics
pub fn widen<const N: usize>(rows: &[[f32; N]]) -> Vec<[f64; N]> {
    rows.iter()
        .map(|row| std::array::from_fn(|k| row[k] as f64))
        .collect()
}

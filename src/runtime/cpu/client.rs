//! CPU client implementation

use super::config::LaunchConfig;
use super::device::CpuDevice;
use super::runtime::CpuRuntime;
use crate::error::Result;
use crate::runtime::RuntimeClient;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// CPU client for kernel dispatch
///
/// Clones share the launch counter, so two clones of one client never hand
/// out the same sample streams.
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    config: LaunchConfig,
    launches: Arc<AtomicU64>,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a new CPU client with an entropy-seeded default configuration
    pub fn new(device: CpuDevice) -> Self {
        Self {
            device,
            config: LaunchConfig::default(),
            launches: Arc::new(AtomicU64::new(0)),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Create a CPU client with an explicit launch configuration
    ///
    /// Builds a dedicated thread pool when `config.num_threads` is set.
    pub fn with_config(device: CpuDevice, config: LaunchConfig) -> Result<Self> {
        #[cfg(feature = "rayon")]
        let pool = match config.num_threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("shadekit-cpu-{i}"))
                    .build()
                    .map_err(|e| crate::error::Error::Backend(e.to_string()))?;
                Some(Arc::new(pool))
            }
            None => None,
        };

        debug!(
            runtime = <CpuRuntime as crate::runtime::Runtime>::name(),
            seed = config.seed,
            num_threads = ?config.num_threads,
            min_len = config.min_len,
            "cpu client configured"
        );

        Ok(Self {
            device,
            config,
            launches: Arc::new(AtomicU64::new(0)),
            #[cfg(feature = "rayon")]
            pool,
        })
    }

    /// Launch configuration in effect
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Number of kernel launches issued so far
    pub fn launch_count(&self) -> u64 {
        self.launches.load(Ordering::Relaxed)
    }

    /// Reserve the stream index for the next launch
    pub(crate) fn next_launch(&self) -> u64 {
        self.launches.fetch_add(1, Ordering::Relaxed)
    }

    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub(crate) fn rayon_min_len(&self) -> usize {
        self.config.min_len
    }

    /// Run `f` inside the dedicated pool if one is configured
    #[cfg(feature = "rayon")]
    pub(crate) fn install_parallelism<F, T>(&self, f: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn synchronize(&self) {
        // Launches block until complete, nothing to do
    }
}

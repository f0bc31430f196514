//! Launch configuration for the CPU client

/// Default minimum number of elements handed to one rayon task
pub const DEFAULT_MIN_LEN: usize = 1024;

/// Configuration applied to every kernel launch on a [`CpuClient`](super::CpuClient)
///
/// # Example
///
/// ```ignore
/// let config = LaunchConfig::default().with_seed(42).with_num_threads(4);
/// let client = CpuClient::with_config(CpuDevice::new(), config)?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Base seed for the per-element sample streams
    pub seed: u64,
    /// Size of a dedicated thread pool; `None` uses the global rayon pool
    pub num_threads: Option<usize>,
    /// Minimum elements per parallel task
    pub min_len: usize,
}

impl Default for LaunchConfig {
    /// Seeds from OS entropy, like an unseeded shader RNG
    fn default() -> Self {
        Self {
            seed: rand::random(),
            num_threads: None,
            min_len: DEFAULT_MIN_LEN,
        }
    }
}

impl LaunchConfig {
    /// Use a fixed seed so launches are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run launches on a dedicated pool of `num_threads` workers
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Set the minimum elements per parallel task (clamped to at least 1)
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = LaunchConfig::default()
            .with_seed(7)
            .with_num_threads(2)
            .with_min_len(0);
        assert_eq!(config.seed, 7);
        assert_eq!(config.num_threads, Some(2));
        assert_eq!(config.min_len, 1);
    }

    #[test]
    fn test_default_uses_global_pool() {
        let config = LaunchConfig::default();
        assert_eq!(config.num_threads, None);
        assert_eq!(config.min_len, DEFAULT_MIN_LEN);
    }
}

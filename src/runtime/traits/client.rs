//! Trait for runtime clients that handle kernel dispatch

use super::Runtime;

/// Trait for runtime clients that handle kernel dispatch
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Synchronize: wait for all pending launches to complete
    fn synchronize(&self);
}

//! Operation traits.
//!
//! Implementations are in the backend-specific modules (cpu/).

mod kernel;
mod random;

pub use kernel::KernelOps;
pub use random::RandomOps;

//! Kernel operations
//!
//! Operations are defined as traits implemented by each runtime's client,
//! which gives them access to the device and the launch configuration.
//!
//! ```text
//! RuntimeClient<R>
//!   ├── implements KernelOps<R>
//!   │     ├── launch      (one scalar per element)
//!   │     └── launch_vec  (one [T; N] vector per element)
//!   └── implements RandomOps<R>
//!         └── rand, rand_range, rand_int, rand_nd, rand_unit_2d, ...
//!             (array-returning wrappers over launch)
//! ```

#[cfg(feature = "cpu")]
pub mod cpu;
mod dispatch;
pub mod traits;

pub use traits::{KernelOps, RandomOps};

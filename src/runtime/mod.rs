//! Runtime backends for kernel execution
//!
//! This module defines the `Runtime` trait and the host implementation.
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity, raw memory)
//! ├── Device (identifies a specific compute unit)
//! └── Client (launches kernels, owns launch configuration)
//! ```
//!
//! Kernel launches block until every element has been written, so arrays
//! can be read back with `to_vec` as soon as a launch returns.

pub mod traits;

#[cfg(feature = "cpu")]
pub mod cpu;

pub use traits::{Device, Runtime, RuntimeClient};

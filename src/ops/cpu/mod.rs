//! CPU implementation of kernel operations.

pub mod kernel;
pub mod random;

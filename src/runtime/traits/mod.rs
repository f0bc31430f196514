//! Backend abstraction: a runtime names a device, owns raw memory and hands
//! out clients that launch kernels.

pub mod client;
pub mod device;
pub mod runtime;

pub use client::RuntimeClient;
pub use device::Device;
pub use runtime::Runtime;

//! Random sampling primitives for kernel bodies
//!
//! Sampling is counter-based: each element of a launch derives its own
//! Philox stream from `(seed, launch, element)`, so kernels stay
//! reproducible under any parallel schedule.

mod philox;
mod sampler;

pub use philox::{PhiloxStream, philox4x32_10};
pub use sampler::Sampler;

//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};

/// Trait for types that can be elements of an array
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - kernel bodies run on worker threads
/// - `Pod + Zeroable` - safe byte casting for host transfers (bytemuck)
/// - `PartialOrd` - range checks in tests and statistics
pub trait Element: Copy + Send + Sync + Pod + Zeroable + PartialOrd + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for statistics
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type (truncating for integers)
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $ty
                }
            }
        )*
    };
}

impl_element! {
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    u32 => U32,
}

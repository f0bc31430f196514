//! Runtime dtype dispatch

/// Macro for runtime dtype dispatch to typed code.
///
/// Executes a block with `T` bound to the Rust type matching a `DType`.
///
/// Usage: `dispatch_dtype!(dtype, T => { code using T })`
#[macro_export]
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            $crate::dtype::DType::U32 => {
                type $T = u32;
                $body
            }
        }
    };
}

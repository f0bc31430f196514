//! Error types for shadekit

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using shadekit's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while allocating arrays, launching kernels or
/// checking sample statistics
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between an array and the values written to it
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Array dtype
        lhs: DType,
        /// Value dtype
        rhs: DType,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A sample statistic fell outside its tolerance band
    #[error(
        "{statistic}: expected {expected} (rel {rel}), got {actual}"
    )]
    ToleranceExceeded {
        /// Which statistic was checked
        statistic: String,
        /// Theoretical value
        expected: f64,
        /// Empirical value
        actual: f64,
        /// Relative tolerance that was applied
        rel: f64,
    },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a tolerance error for a named statistic
    pub fn tolerance(statistic: impl Into<String>, expected: f64, actual: f64, rel: f64) -> Self {
        Self::ToleranceExceeded {
            statistic: statistic.into(),
            expected,
            actual,
            rel,
        }
    }
}

//! Core Array type

use super::Storage;
use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use std::fmt;

/// Array of scalars (shape `[n]`) or fixed-width vectors (shape `[n, w]`)
/// stored on a compute device
///
/// Memory is shared between the host and kernels: a kernel launch writes
/// into the storage in place and the host reads it back with `to_vec`.
/// Cloning an array is zero-copy and shares the storage; launches refuse
/// an output whose storage has other live handles.
///
/// # Example
///
/// ```ignore
/// let mut x = array::<CpuRuntime>(DType::F32, 1024, &device)?;
/// client.launch(&mut x, |_, s| s.rand())?;
/// let samples: Vec<f32> = x.to_vec();
/// ```
pub struct Array<R: Runtime> {
    storage: Storage<R>,
    shape: Vec<usize>,
}

fn validate_shape(shape: &[usize]) -> Result<()> {
    match shape {
        [_] => Ok(()),
        [_, w] if *w > 0 => Ok(()),
        [_, _] => Err(Error::invalid_argument(
            "shape",
            "vector width must be at least 1",
        )),
        _ => Err(Error::invalid_argument(
            "shape",
            format!("expected [n] or [n, width], got {:?}", shape),
        )),
    }
}

impl<R: Runtime> Array<R> {
    /// Allocate an array (fallible version)
    ///
    /// Device memory is zero-initialized by every runtime.
    pub fn try_empty(shape: &[usize], dtype: DType, device: &R::Device) -> Result<Self> {
        validate_shape(shape)?;
        let len = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or(Error::OutOfMemory { size: usize::MAX })?;
        let storage = Storage::new(len, dtype, device)?;

        Ok(Self {
            storage,
            shape: shape.to_vec(),
        })
    }

    /// Allocate an array
    ///
    /// # Panics
    ///
    /// Panics if the shape is not `[n]` or `[n, w]`, or allocation fails.
    /// For a fallible alternative, use [`Self::try_empty`].
    pub fn empty(shape: &[usize], dtype: DType, device: &R::Device) -> Self {
        Self::try_empty(shape, dtype, device).expect("Array::empty failed")
    }

    /// Allocate an array filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType, device: &R::Device) -> Self {
        Self::empty(shape, dtype, device)
    }

    /// Create an array from host data (fallible version)
    ///
    /// Returns `ShapeMismatch` if `data.len()` does not equal the product
    /// of the `shape` dimensions.
    pub fn try_from_slice<T: Element>(
        data: &[T],
        shape: &[usize],
        device: &R::Device,
    ) -> Result<Self> {
        validate_shape(shape)?;
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            storage: Storage::from_slice(data, device)?,
            shape: shape.to_vec(),
        })
    }

    /// Create an array from host data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not match `shape`.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize], device: &R::Device) -> Self {
        Self::try_from_slice(data, shape, device).expect("Array::from_slice failed")
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of elements along the first axis (scalars or vectors)
    #[inline]
    pub fn len(&self) -> usize {
        self.shape[0]
    }

    /// Check if the array has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    /// Total number of scalar components
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Vector width (1 for scalar arrays)
    #[inline]
    pub fn width(&self) -> usize {
        self.shape.get(1).copied().unwrap_or(1)
    }

    /// Whether this is an array of vectors
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.shape.len() == 2
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Get the device
    #[inline]
    pub fn device(&self) -> &R::Device {
        self.storage.device()
    }

    /// Get the underlying storage
    #[inline]
    pub fn storage(&self) -> &Storage<R> {
        &self.storage
    }

    /// Copy all scalar components to the host (fallible version)
    pub fn try_to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.storage.to_vec()
    }

    /// Copy all scalar components to the host, row-major
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the array dtype.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.try_to_vec().expect("Array::to_vec failed")
    }

    /// Copy a vector array to the host as rows of `[T; N]`
    ///
    /// Returns `ShapeMismatch` unless the array shape is `[n, N]`.
    pub fn to_vec_n<T: Element, const N: usize>(&self) -> Result<Vec<[T; N]>> {
        if !self.is_vector() || self.width() != N {
            return Err(Error::shape_mismatch(&[self.len(), N], &self.shape));
        }

        let flat = self.try_to_vec::<T>()?;
        Ok(flat
            .chunks_exact(N)
            .map(|row| std::array::from_fn(|k| row[k]))
            .collect())
    }

    /// Copy all scalar components to the host converted to `f64`
    pub fn to_f64_vec(&self) -> Result<Vec<f64>> {
        dispatch_dtype!(self.dtype(), T => {
            Ok(self.try_to_vec::<T>()?.into_iter().map(Element::to_f64).collect())
        })
    }
}

impl<R: Runtime> Clone for Array<R> {
    /// Zero-copy: the clone shares storage
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            shape: self.shape.clone(),
        }
    }
}

impl<R: Runtime> fmt::Debug for Array<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype())
            .finish()
    }
}

/// Allocate a scalar array of `n` elements
pub fn array<R: Runtime>(dtype: DType, n: usize, device: &R::Device) -> Result<Array<R>> {
    Array::try_empty(&[n], dtype, device)
}

/// Allocate an array of `n` vectors, each `width` components wide
pub fn vec_array<R: Runtime>(
    width: usize,
    dtype: DType,
    n: usize,
    device: &R::Device,
) -> Result<Array<R>> {
    Array::try_empty(&[n, width], dtype, device)
}

#[cfg(all(test, feature = "cpu"))]
mod tests {
    use super::*;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[test]
    fn test_scalar_array_shape() {
        let device = CpuDevice::new();
        let x = array::<CpuRuntime>(DType::F32, 16, &device).unwrap();
        assert_eq!(x.shape(), &[16]);
        assert_eq!(x.len(), 16);
        assert_eq!(x.width(), 1);
        assert!(!x.is_vector());
        assert_eq!(x.to_vec::<f32>(), vec![0.0; 16]);
    }

    #[test]
    fn test_vec_array_shape() {
        let device = CpuDevice::new();
        let x = vec_array::<CpuRuntime>(3, DType::F64, 5, &device).unwrap();
        assert_eq!(x.shape(), &[5, 3]);
        assert_eq!(x.len(), 5);
        assert_eq!(x.numel(), 15);
        assert_eq!(x.width(), 3);
        assert!(x.is_vector());
    }

    #[test]
    fn test_invalid_shapes() {
        let device = CpuDevice::new();
        assert!(Array::<CpuRuntime>::try_empty(&[2, 2, 2], DType::F32, &device).is_err());
        assert!(Array::<CpuRuntime>::try_empty(&[], DType::F32, &device).is_err());
        assert!(vec_array::<CpuRuntime>(0, DType::F32, 4, &device).is_err());
    }

    #[test]
    fn test_from_slice_and_rows() {
        let device = CpuDevice::new();
        let x = Array::<CpuRuntime>::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2], &device);
        let rows = x.to_vec_n::<f32, 2>().unwrap();
        assert_eq!(rows, vec![[1.0, 2.0], [3.0, 4.0]]);
        assert!(x.to_vec_n::<f32, 3>().is_err());
    }

    #[test]
    fn test_from_slice_length_mismatch() {
        let device = CpuDevice::new();
        let result = Array::<CpuRuntime>::try_from_slice(&[1i32, 2, 3], &[4], &device);
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_to_vec_dtype_checked() {
        let device = CpuDevice::new();
        let x = Array::<CpuRuntime>::from_slice(&[1i32, 2], &[2], &device);
        assert!(matches!(
            x.try_to_vec::<f32>(),
            Err(Error::DTypeMismatch { .. })
        ));
        assert_eq!(x.to_f64_vec().unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_clone_shares_storage() {
        let device = CpuDevice::new();
        let x = array::<CpuRuntime>(DType::U32, 4, &device).unwrap();
        let y = x.clone();
        assert_eq!(x.storage().ptr(), y.storage().ptr());
        assert_eq!(x.storage().ref_count(), 2);
    }

    #[test]
    fn test_empty_array() {
        let device = CpuDevice::new();
        let x = array::<CpuRuntime>(DType::F32, 0, &device).unwrap();
        assert!(x.is_empty());
        assert!(x.to_vec::<f32>().is_empty());
    }
}

//! Raw pointer entry points for callers on the far side of a language boundary.
//!
//! These functions turn a `(pointer, length)` pair into a borrowed slice and
//! forward to [`BufferMarshaller`]. The declared length is the only length
//! information available; nothing is inferred from the pointer.
//!
//! # Safety
//!
//! For every function here, a non-null `ptr` must point to `len` initialized,
//! properly aligned values that are not mutated for the duration of the call.

use std::slice;

use num_complex::Complex64;

use crate::error::MarshalError;
use crate::marshal::{BufferMarshaller, Result};
use crate::math::{CMatrix, CVector, RVector, Vector3};

/// Borrow `len` values starting at `ptr`.
///
/// A null pointer with `len == 0` yields an empty slice. A null pointer with
/// any other length is a [`MarshalError::NullBuffer`].
///
/// # Safety
///
/// See the module documentation.
pub unsafe fn borrow_raw<'a, T>(ptr: *const T, len: usize) -> Result<&'a [T]> {
    if ptr.is_null() {
        if len == 0 {
            return Ok(&[] as &[T]);
        }
        return Err(MarshalError::NullBuffer { len });
    }
    // SAFETY: non-null, and the caller guarantees `len` valid elements behind `ptr`.
    Ok(slice::from_raw_parts(ptr, len))
}

impl BufferMarshaller {
    /// # Safety
    ///
    /// `delta` must be valid for `delta_size` reads.
    pub unsafe fn partition_to_vectors_raw(
        &self,
        delta: *const f64,
        delta_size: usize,
        lasers_size: usize,
    ) -> Result<Vec<RVector>> {
        let buffer = borrow_raw(delta, delta_size)?;
        self.partition_to_vectors(buffer, delta_size, lasers_size)
    }

    /// # Safety
    ///
    /// `v` must be valid for `v_size` reads.
    pub unsafe fn partition_to_triples_raw(&self, v: *const f64, v_size: usize) -> Result<Vec<Vector3>> {
        let buffer = borrow_raw(v, v_size)?;
        self.partition_to_triples(buffer, v_size)
    }

    /// # Safety
    ///
    /// `y0` must be valid for `size` reads.
    pub unsafe fn view_as_vector_raw(&self, y0: *const f64, size: usize) -> Result<RVector> {
        let buffer = borrow_raw(y0, size)?;
        self.view_as_vector(buffer, size)
    }

    /// # Safety
    ///
    /// `y0` must be valid for `size` complex reads.
    pub unsafe fn view_as_complex_vector_raw(&self, y0: *const Complex64, size: usize) -> Result<CVector> {
        let buffer = borrow_raw(y0, size)?;
        self.view_as_complex_vector(buffer, size)
    }

    /// # Safety
    ///
    /// `y0` must be valid for as many complex reads as the configured
    /// [`MatrixSize`](crate::config::MatrixSize) convention derives from `size`.
    pub unsafe fn view_as_complex_matrix_raw(&self, y0: *const Complex64, size: usize) -> Result<CMatrix> {
        let len = self.matrix_len(size)?;
        let buffer = borrow_raw(y0, len)?;
        self.view_as_complex_matrix(buffer, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn null_with_zero_length_is_empty() {
        let values: &[f64] = unsafe { borrow_raw(ptr::null(), 0) }.unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn null_with_length_is_rejected() {
        let err = unsafe { borrow_raw::<f64>(ptr::null(), 4) }.unwrap_err();
        assert_eq!(err, MarshalError::NullBuffer { len: 4 });
    }

    #[test]
    fn valid_pointer_borrows_exact_length() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let values = unsafe { borrow_raw(data.as_ptr(), 3) }.unwrap();
        assert_eq!(values, &[1.0, 2.0, 3.0]);
    }
}
